//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the persistence seam of DevNotes. It models a
//! string-to-string store in the shape of a browser's local storage: whole
//! values are read and replaced, nothing is incremental.

use crate::error::Result;

/// String key-value storage backend.
///
/// Implementations must ensure:
/// - `set` replaces the previous value for the key in full
/// - A failed `set` leaves the previous value readable
/// - `remove` of an absent key is not an error
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if not.
    ///
    /// # Errors
    ///
    /// Returns `DevNotesError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DevNotesError::QuotaExceeded` if the backend has a size limit
    /// the write would exceed, or `DevNotesError::Storage` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
