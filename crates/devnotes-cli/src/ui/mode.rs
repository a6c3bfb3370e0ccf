//! Output mode routing.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

/// What the process knows about where stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub dumb: bool,
    pub no_color: bool,
}

impl Terminal {
    /// Inspect stdout, `TERM` and `NO_COLOR`.
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    /// Whether a pretty rendering is possible at all.
    pub fn supports_pretty(&self) -> bool {
        self.stdout_tty && !self.dumb
    }
}

/// How note listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON only, nothing else on stdout
    Json,
    /// One note per line; stable for pipes
    #[default]
    Plain,
    /// Table with header, pin column and colors
    Pretty,
}

impl OutputMode {
    /// `--json` wins over everything. An explicit `plain` format is honored
    /// even on a TTY; `table` only applies when the terminal can show it.
    pub fn resolve(json: bool, format: Option<OutputFormat>, terminal: &Terminal) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            _ if terminal.supports_pretty() => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        stdout_tty: true,
        dumb: false,
        no_color: false,
    };

    #[test]
    fn json_beats_format() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), &TTY);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn plain_format_on_tty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), &TTY);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn table_needs_a_capable_terminal() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), &TTY),
            OutputMode::Pretty
        );
        let piped = Terminal::default();
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), &piped),
            OutputMode::Plain
        );
    }

    #[test]
    fn dumb_terminal_is_plain() {
        let dumb = Terminal { dumb: true, ..TTY };
        assert_eq!(OutputMode::resolve(false, None, &dumb), OutputMode::Plain);
    }
}
