//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use zkvault_core::VaultError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (envelope file, etc.)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password or salt, tampered envelope)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
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

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

impl From<VaultError> for CliError {
    fn from(err: VaultError) -> Self {
        tracing::debug!(kind = err.kind(), "vault operation failed");
        match err {
            VaultError::Decryption => CliError::auth_failed_with_hint(
                VaultError::Decryption.to_string(),
                "Hint: Check the password and salt, and that the envelope was not modified.",
            ),
            VaultError::Locked => CliError::auth_failed_with_hint(
                VaultError::Locked.to_string(),
                "Hint: A password is required to unlock the vault.",
            ),
            other => CliError::invalid_input(other.to_string()),
        }
    }
}

/// Exit code for an error bubbled up through anyhow.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_maps_to_auth_failed() {
        let err = CliError::from(VaultError::Decryption);
        assert_eq!(err.exit_code(), exit_codes::AUTH_FAILED);
        assert!(err.to_string().starts_with("Decryption failed"));
    }

    #[test]
    fn test_derivation_maps_to_invalid_input() {
        let err = CliError::from(VaultError::Derivation("Salt cannot be empty".into()));
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err: anyhow::Error = CliError::not_found("Envelope file not found", "Hint: x").into();
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), 1);
    }
}
