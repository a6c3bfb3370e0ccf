//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_store_path, DevNotesConfig};

/// Resolve the config file path, checking DEVNOTES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DEVNOTES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store file path.
///
/// Precedence: `--store` / `DEVNOTES_PATH`, then the config file, then the
/// XDG data directory default.
pub fn resolve_store_path(
    flag: Option<&str>,
    config: Option<&DevNotesConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let config = DevNotesConfig::new(PathBuf::from("/from/config.json"));
        let path = resolve_store_path(Some("/from/flag.json"), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let config = DevNotesConfig::new(PathBuf::from("/from/config.json"));
        let path = resolve_store_path(None, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_blank_flag_is_ignored() {
        let config = DevNotesConfig::new(PathBuf::from("/from/config.json"));
        let path = resolve_store_path(Some("  "), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }
}
