//! Data model for the rich text widget
//!
//! - `commands`: the static formatting command registry
//! - `snapshot`: editor/selection snapshots and color state
//! - `stats`: derived text statistics

pub mod commands;
pub mod snapshot;
pub mod stats;

pub use commands::*;
pub use snapshot::*;
pub use stats::*;
