//! File-backed key-value store.
//!
//! The whole store is one JSON object of string values, rewritten atomically
//! on every change.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{DevNotesError, Result};
use crate::storage::traits::KeyValueStore;

/// Key-value store persisted as a JSON object in a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens as an empty store; the file is created on the
    /// first write. A file that is not UTF-8 JSON holding an object of strings
    /// is treated as empty as well and will be replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns `DevNotesError::Storage` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => parse_entries(&path, &bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=store_open status=missing path={}", path.display());
                BTreeMap::new()
            }
            Err(err) => {
                return Err(DevNotesError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        crate::fs::write_atomic(&self.path, &data).map_err(|e| {
            DevNotesError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

fn parse_entries(path: &Path, bytes: &[u8]) -> BTreeMap<String, String> {
    let contents = match std::str::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(
                "event=store_open status=not_utf8 path={} error={}",
                path.display(),
                err
            );
            return BTreeMap::new();
        }
    };
    if contents.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str(contents) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "event=store_open status=malformed path={} error={}",
                path.display(),
                err
            );
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}
