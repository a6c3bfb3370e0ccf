//! Per-command rendering settings.

use crate::cli::Cli;
use crate::helpers::OutputFormat;

use super::mode::{OutputMode, Terminal};

/// Everything the renderers need to know about the current invocation.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Settings for this process: global flags plus the command's own
    /// `--json` / `--format`.
    pub fn for_command(cli: &Cli, json: bool, format: Option<OutputFormat>) -> Self {
        Self::with_terminal(cli, json, format, &Terminal::detect())
    }

    fn with_terminal(
        cli: &Cli,
        json: bool,
        format: Option<OutputFormat>,
        terminal: &Terminal,
    ) -> Self {
        let mode = OutputMode::resolve(json, format, terminal);
        Self {
            color: mode.is_pretty() && !cli.no_color && !terminal.no_color,
            unicode: !cli.ascii,
            mode,
        }
    }
}
