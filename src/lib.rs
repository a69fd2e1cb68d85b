//! Rich Text Widget WASM Module
//!
//! A formatting toolbar, live preview, raw-markup view and text statistics
//! layered over the browser's own `contenteditable` engine. Selection
//! tracking, undo and markup serialization stay with the host; this crate
//! keeps the derived state in sync with it.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod observer;
pub mod preview;
pub mod renderers;
pub mod surface;
pub mod toolbar;

// Re-export commonly used types
pub use api::RichTextEditor;
pub use config::EditorConfig;
pub use controller::{RootController, StateReport};
pub use error::{EditorError, Result};
pub use models::*;
pub use surface::{SurfaceAdapter, TextSurface};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("Rich text widget WASM module initialized");
}
