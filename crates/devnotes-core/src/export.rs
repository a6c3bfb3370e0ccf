//! Export formats.
//!
//! CSV is the primary export: a `Content,Fixed` header and one row per note,
//! rows separated by `\n` with no trailing newline. The content field is
//! always quoted, with embedded quotes doubled. JSON export writes the same
//! array layout the store persists.

use std::fmt;
use std::str::FromStr;

use crate::error::{DevNotesError, Result};
use crate::note::Note;

/// Default file name for an exported collection.
pub const EXPORT_FILE_NAME: &str = "notes.csv";

const CSV_HEADER: &str = "Content,Fixed";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Render `notes` in this format.
    pub fn render(&self, notes: &[Note]) -> Result<Vec<u8>> {
        match self {
            Self::Csv => Ok(to_csv(notes).into_bytes()),
            Self::Json => Ok(to_json(notes)?.into_bytes()),
        }
    }

    /// Suggested file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => EXPORT_FILE_NAME,
            Self::Json => "notes.json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DevNotesError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(DevNotesError::InvalidInput(format!(
                "Unsupported export format: {} (use csv or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render notes as CSV.
pub fn to_csv(notes: &[Note]) -> String {
    let rows: Vec<String> = notes
        .iter()
        .map(|note| format!("{},{}", quote_field(note.content()), note.is_fixed()))
        .collect();
    format!("{}\n{}", CSV_HEADER, rows.join("\n"))
}

/// Render notes as a pretty-printed JSON array.
pub fn to_json(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
