//! Note content input.

use std::io::{self, IsTerminal, Read};

use dialoguer::Input;

use crate::errors::CliError;

/// Read note content from the argument, stdin, or an interactive prompt.
///
/// Order of precedence:
/// 1. `content` argument
/// 2. piped stdin (trailing whitespace trimmed)
/// 3. a prompt on a TTY, pre-filled with `initial` when editing
///
/// Empty content is rejected as invalid input.
pub fn read_note_content(
    content: Option<String>,
    no_input: bool,
    initial: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = content {
        return non_empty(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return non_empty(buffer.trim_end().to_string());
    }

    if no_input {
        return Err(CliError::invalid_input(
            "--no-input requires content as an argument or on stdin",
        )
        .into());
    }

    let mut prompt = Input::<String>::new().with_prompt("Note");
    if let Some(text) = initial {
        prompt = prompt.with_initial_text(text);
    }
    let value = prompt
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read note: {}", e))?;
    non_empty(value)
}

fn non_empty(value: String) -> anyhow::Result<String> {
    if value.is_empty() {
        return Err(CliError::invalid_input("Note content cannot be empty").into());
    }
    Ok(value)
}
