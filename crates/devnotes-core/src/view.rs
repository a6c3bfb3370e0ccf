//! Display projection.

use crate::note::Note;

/// Order notes for display: pinned notes first, then unpinned ones.
///
/// The partition is stable; notes keep their relative order inside each
/// group.
pub fn project_for_display(notes: &[Note]) -> Vec<Note> {
    let (mut pinned, others): (Vec<Note>, Vec<Note>) =
        notes.iter().cloned().partition(Note::is_fixed);
    pinned.extend(others);
    pinned
}
