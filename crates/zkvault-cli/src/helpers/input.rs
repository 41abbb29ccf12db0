//! Input handling helpers for password, salt, and payload reading.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use dialoguer::Password;
use secrecy::SecretString;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Prompt for the password, or read it from ZKVAULT_PASSWORD.
///
/// The prompt reads from the terminal attached to stderr, so piping the
/// plaintext or envelope through stdin still allows it. There is no
/// command-line flag for the password.
pub fn prompt_password(no_input: bool) -> anyhow::Result<SecretString> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.is_empty() {
            return Ok(SecretString::from(value));
        }
    }
    if !can_prompt(no_input, io::stderr().is_terminal()) {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_ENV
        ))
        .into());
    }
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::from(password))
}

fn can_prompt(no_input: bool, stderr_is_terminal: bool) -> bool {
    !no_input && stderr_is_terminal
}

/// Require a salt from --salt or ZKVAULT_SALT.
pub fn require_salt(salt: Option<&str>) -> anyhow::Result<String> {
    match salt {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(CliError::invalid_input(
            "A salt is required. Pass --salt or set ZKVAULT_SALT.",
        )
        .into()),
    }
}

/// Read plaintext from --text or stdin.
///
/// Stdin is taken verbatim; an empty plaintext is valid.
pub fn read_plaintext(text: Option<String>, no_input: bool) -> anyhow::Result<String> {
    if let Some(value) = text {
        return Ok(value);
    }
    if io::stdin().is_terminal() && no_input {
        return Err(CliError::invalid_input("--no-input requires content from stdin").into());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Read an envelope from a file or stdin, trimming surrounding whitespace.
pub fn read_envelope(path: Option<&str>) -> anyhow::Result<String> {
    let contents = match path {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(CliError::not_found(
                    format!("Envelope file not found: {}", path.display()),
                    "Hint: Pass the file written by `zkvault encrypt`, or pipe the envelope via stdin.",
                )
                .into());
            }
            std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            buffer
        }
    };
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("No envelope provided").into());
    }
    Ok(trimmed.to_string())
}
