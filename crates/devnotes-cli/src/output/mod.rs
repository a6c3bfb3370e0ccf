//! Output formatting helpers for the CLI.
//!
//! Notes are printed as JSON, a table, or plain text depending on the
//! resolved output mode.

mod json;
mod text;

pub use json::{note_json, notes_json};
pub use text::{print_note, print_note_list};
