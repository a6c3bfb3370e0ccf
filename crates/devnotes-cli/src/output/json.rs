//! JSON output formatting for notes.

use devnotes_core::Note;

/// Convert a note to JSON for output.
pub fn note_json(note: &Note) -> serde_json::Value {
    serde_json::json!({
        "id": note.id(),
        "content": note.content(),
        "fixed": note.is_fixed(),
    })
}

/// Convert multiple notes to a JSON array for output.
pub fn notes_json(notes: &[Note]) -> Vec<serde_json::Value> {
    notes.iter().map(note_json).collect()
}
