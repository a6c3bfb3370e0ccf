//! Input and parsing helper functions for the CLI.
//!
//! - Note content reading from arguments, stdin or a prompt (`input`)
//! - Format flag parsing (`parsing`)

mod input;
mod parsing;

pub use input::read_note_content;
pub use parsing::{parse_export_format, parse_output_format, OutputFormat};
