//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. `main` downcasts the returned
//! `anyhow::Error` and exits with the matching code.

use std::fmt;

use devnotes_core::DevNotesError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (note id, config)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\nHint: {}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// The standard "no such note" error.
    pub fn note_not_found(id: &str) -> Self {
        Self::not_found(
            format!("No note with id \"{}\"", id),
            "Run `devnotes list` to see note IDs.",
        )
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }

    /// Classify an error returned by a command, if it maps to a typed exit code.
    pub fn classify(err: &anyhow::Error) -> Option<CliError> {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            return Some(match cli_err {
                CliError::NotFound { message, hint } => CliError::not_found(message, hint),
                CliError::InvalidInput(message) => CliError::invalid_input(message),
            });
        }
        match err.downcast_ref::<DevNotesError>() {
            Some(DevNotesError::InvalidInput(message)) => Some(CliError::invalid_input(message)),
            _ => None,
        }
    }
}
