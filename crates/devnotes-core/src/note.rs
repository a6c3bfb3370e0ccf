//! The note record.

use serde::{Deserialize, Serialize};

/// A single user-authored text entry with pin state.
///
/// Serialized as `{ "id": ..., "content": ..., "fixed": ... }`, which is
/// also the persisted layout. The id is fixed at creation; only the owning
/// [`NoteStore`](crate::NoteStore) mutates content and pin state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: String,
    content: String,
    #[serde(default)]
    fixed: bool,
}

impl Note {
    /// Create an unpinned note.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            fixed: false,
        }
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the note is pinned.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn toggle_fixed(&mut self) -> bool {
        self.fixed = !self.fixed;
        self.fixed
    }
}
