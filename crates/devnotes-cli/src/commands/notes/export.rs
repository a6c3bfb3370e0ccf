use std::io::Write;
use std::path::{Path, PathBuf};

use devnotes_core::{ExportFormat, FileStore, NoteStore};
use log::info;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::parse_export_format;

/// Export the whole collection to stdout or a file.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = parse_export_format(&args.format)?;
    let store = ctx.open_store()?;
    let bytes = export_bytes(&store, format)?;

    match &args.output {
        Some(output) => {
            let target = export_target(output.as_deref(), format);
            devnotes_core::fs::write_atomic(&target, &bytes)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", target.display(), e))?;
            info!(
                "event=cli_export format={} path={} notes={}",
                format,
                target.display(),
                store.len()
            );
            if !ctx.quiet() {
                eprintln!("Exported {} notes to {}", store.len(), target.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            if !bytes.ends_with(b"\n") {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

fn export_bytes(store: &NoteStore<FileStore>, format: ExportFormat) -> anyhow::Result<Vec<u8>> {
    Ok(match format {
        ExportFormat::Csv => store.export_csv(),
        ExportFormat::Json => store.export_json()?,
    })
}

/// Bare `--output` writes the format's default file name in the current
/// directory; a directory gets that file name inside it.
fn export_target(output: Option<&str>, format: ExportFormat) -> PathBuf {
    match output.filter(|value| !value.trim().is_empty()) {
        None => PathBuf::from(format.file_name()),
        Some(value) => {
            let path = Path::new(value);
            if path.is_dir() {
                path.join(format.file_name())
            } else {
                path.to_path_buf()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_output_uses_default_name() {
        assert_eq!(
            export_target(None, ExportFormat::Csv),
            PathBuf::from("notes.csv")
        );
        assert_eq!(
            export_target(None, ExportFormat::Json),
            PathBuf::from("notes.json")
        );
    }

    #[test]
    fn test_directory_output_gets_default_name() {
        let dir = std::env::temp_dir();
        let target = export_target(dir.to_str(), ExportFormat::Csv);
        assert_eq!(target, dir.join("notes.csv"));
    }

    #[test]
    fn test_file_output_is_used_as_is() {
        let target = export_target(Some("backup/my-notes.csv"), ExportFormat::Csv);
        assert_eq!(target, PathBuf::from("backup/my-notes.csv"));
    }
}
