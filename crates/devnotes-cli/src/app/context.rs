//! Application context for the DevNotes CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use log::info;
use once_cell::unsync::OnceCell;

use devnotes_core::{FileStore, NoteStore};

use crate::cli::Cli;
use crate::config::{read_config, DevNotesConfig};

use super::resolver::{resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DevNotesConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file contents, or `None` when no config file exists.
    pub fn config(&self) -> anyhow::Result<Option<&DevNotesConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Default list/search format from the config file.
    pub fn default_format(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.and_then(|c| c.ui.format.as_deref()))
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli.store.as_deref(), self.config()?)
    }

    /// Open the note store at the resolved path.
    pub fn open_store(&self) -> anyhow::Result<NoteStore<FileStore>> {
        let path = self.store_path()?;
        info!("event=store_resolve path={}", path.display());
        let storage = FileStore::open(&path)?;
        Ok(NoteStore::open(storage))
    }
}
