//! Note collection manager.
//!
//! `NoteStore` owns the in-memory collection, which is the source of truth
//! for the session. Every mutation is followed by a full write of the
//! collection to the injected [`KeyValueStore`] under [`NOTES_KEY`].
//!
//! Lookups by id that miss are silent no-ops, never errors.

use log::{debug, warn};

use crate::error::{DevNotesError, Result};
use crate::export::{to_csv, ExportFormat};
use crate::id::unique_id;
use crate::note::Note;
use crate::storage::KeyValueStore;
use crate::view::project_for_display;

/// Storage key holding the JSON array of notes.
pub const NOTES_KEY: &str = "notes";

/// Ordered note collection backed by a key-value store.
pub struct NoteStore<S: KeyValueStore> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Open a store, loading whatever collection `storage` holds.
    pub fn open(storage: S) -> Self {
        let notes = load_notes(&storage);
        debug!("event=store_open status=ok notes={}", notes.len());
        Self { storage, notes }
    }

    /// Read the persisted collection.
    ///
    /// Absent or malformed data yields an empty collection.
    pub fn load(&self) -> Vec<Note> {
        load_notes(&self.storage)
    }

    /// Write the full in-memory collection, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Propagates storage failures such as `DevNotesError::QuotaExceeded`.
    pub fn save(&mut self) -> Result<()> {
        save_notes(&mut self.storage, &self.notes)
    }

    /// Create a note with a fresh id and append it.
    ///
    /// The note stays in memory even if persisting it fails.
    ///
    /// # Errors
    ///
    /// Returns `DevNotesError::InvalidInput` for empty content, or a storage
    /// error if the write fails.
    pub fn add(&mut self, content: impl Into<String>) -> Result<Note> {
        let content = content.into();
        if content.is_empty() {
            return Err(DevNotesError::InvalidInput(
                "Note content cannot be empty".to_string(),
            ));
        }

        let note = Note::new(unique_id(&self.notes), content);
        self.notes.push(note.clone());
        debug!("event=note_add id={} notes={}", note.id(), self.notes.len());
        self.save()?;
        Ok(note)
    }

    /// Remove the note with `id`.
    ///
    /// Returns whether a note was removed. The collection is persisted
    /// either way.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id() != id);
        let removed = self.notes.len() != before;
        debug!("event=note_delete id={} removed={}", id, removed);
        self.save()?;
        Ok(removed)
    }

    /// Add a copy of the note with `id`.
    ///
    /// The copy gets a new id and is unpinned. Returns `Ok(None)` without
    /// touching the collection when `id` is unknown.
    pub fn duplicate(&mut self, id: &str) -> Result<Option<Note>> {
        let Some(content) = self.get(id).map(|note| note.content().to_string()) else {
            debug!("event=note_duplicate id={} status=missing", id);
            return Ok(None);
        };
        let copy = self.add(content)?;
        debug!("event=note_duplicate id={} copy={}", id, copy.id());
        Ok(Some(copy))
    }

    /// Flip the pin state of the note with `id`.
    ///
    /// Returns the new pin state, or `None` if `id` is unknown. The
    /// collection is persisted either way.
    pub fn toggle_fixed(&mut self, id: &str) -> Result<Option<bool>> {
        let fixed = self
            .notes
            .iter_mut()
            .find(|note| note.id() == id)
            .map(Note::toggle_fixed);
        debug!("event=note_toggle_fixed id={} fixed={:?}", id, fixed);
        self.save()?;
        Ok(fixed)
    }

    /// Replace the content of the note with `id`.
    ///
    /// Returns whether a note was updated. Nothing is written when `id` is
    /// unknown.
    pub fn update(&mut self, id: &str, content: impl Into<String>) -> Result<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            debug!("event=note_update id={} status=missing", id);
            return Ok(false);
        };
        note.set_content(content.into());
        debug!("event=note_update id={} status=ok", id);
        self.save()?;
        Ok(true)
    }

    /// Notes whose content contains `query`, ignoring case.
    ///
    /// An empty query matches every note. Results keep collection order.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.content().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// The whole collection as CSV bytes.
    pub fn export_csv(&self) -> Vec<u8> {
        to_csv(&self.notes).into_bytes()
    }

    /// The whole collection as pretty JSON bytes.
    pub fn export_json(&self) -> Result<Vec<u8>> {
        ExportFormat::Json.render(&self.notes)
    }

    /// Pinned-first ordering of `notes`.
    pub fn project_for_display(notes: &[Note]) -> Vec<Note> {
        project_for_display(notes)
    }

    /// Pinned-first ordering of the whole collection.
    pub fn display(&self) -> Vec<Note> {
        project_for_display(&self.notes)
    }

    /// The collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Read the notes array stored under [`NOTES_KEY`].
pub fn load_notes<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<Note> {
    let raw = match storage.get(NOTES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=notes_load status=read_failed error={}", err);
            return Vec::new();
        }
    };
    // A stored `null` is what an unset value serializes to; treat it as empty.
    match serde_json::from_str::<Option<Vec<Note>>>(&raw) {
        Ok(notes) => notes.unwrap_or_default(),
        Err(err) => {
            warn!("event=notes_load status=malformed error={}", err);
            Vec::new()
        }
    }
}

/// Serialize `notes` and store them under [`NOTES_KEY`].
pub fn save_notes<S: KeyValueStore + ?Sized>(storage: &mut S, notes: &[Note]) -> Result<()> {
    let raw = serde_json::to_string(notes)?;
    storage.set(NOTES_KEY, &raw)
}
