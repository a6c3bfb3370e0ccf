use std::path::PathBuf;

use log::info;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, DevNotesConfig};
use crate::errors::CliError;

/// Write a config file that points at the chosen store path.
///
/// The store file itself is created lazily by the first write.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    write_config(&config_path, &DevNotesConfig::new(store_path.clone()))?;
    info!(
        "event=config_write path={} store={}",
        config_path.display(),
        store_path.display()
    );

    if !ctx.quiet() {
        println!("Wrote config {}", config_path.display());
        println!("Notes will be stored at {}", store_path.display());
    }
    Ok(())
}
