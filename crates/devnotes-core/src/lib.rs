//! # DevNotes Core
//!
//! Core library for DevNotes - a small local note keeper with pinning,
//! search and CSV export.
//!
//! This crate owns the note collection and its persistence, independent of
//! any user interface. A front end (the `devnotes` CLI, or anything else)
//! calls [`NoteStore`] operations directly and renders the results.
//!
//! ## Architecture
//!
//! - **note**: the `Note` record
//! - **storage**: key-value store trait and its memory/file backends
//! - **store**: `NoteStore`, the collection manager
//! - **export**: CSV and JSON export formats
//! - **view**: display projection (pinned first)

pub mod error;
pub mod export;
pub mod fs;
pub mod id;
pub mod note;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{DevNotesError, Result};
pub use export::{ExportFormat, EXPORT_FILE_NAME};
pub use note::Note;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{NoteStore, NOTES_KEY};
pub use view::project_for_display;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
