//! Flag parsing helpers.

use devnotes_core::ExportFormat;

use crate::errors::CliError;

/// Output format for list/search commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse export format string.
pub fn parse_export_format(value: &str) -> anyhow::Result<ExportFormat> {
    value
        .parse::<ExportFormat>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}
