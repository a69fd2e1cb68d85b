//! Rich text widget WASM API
//!
//! - `helpers`: serde conversions to and from `JsValue`
//! - `editor`: the `RichTextEditor` class plus free helper functions

pub mod editor;
pub mod helpers;

pub use editor::{formatting_commands, text_statistics, RichTextEditor};
