//! UI primitives for the DevNotes CLI.
//!
//! - **Context**: Color and unicode settings for one command
//! - **Mode**: Terminal detection and output mode (json, plain, pretty)
//! - **Theme**: Badges, pin symbol, styling
//! - **Render**: Headers, tables, hints, key-value lines
//! - **Format**: String utilities (truncate, summaries)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, simple_table, Column};

pub use format::summary;
