//! Error types for zkvault core operations.
//!
//! The taxonomy is intentionally small. Decryption failures of every kind
//! collapse into a single variant with a fixed message, so callers (and
//! anything they log) cannot tell a wrong key from corrupted data.
//!
//! No variant ever carries a password, plaintext, or key material.

use thiserror::Error;

/// Result type alias for zkvault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for zkvault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Key derivation failed (bad salt, empty password, rejected parameters)
    #[error("Key derivation failed: {0}")]
    Derivation(String),

    /// Encryption failed (randomness or cipher failure)
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed for any reason
    #[error("Decryption failed")]
    Decryption,

    /// No key is held by the session
    #[error("Vault is locked")]
    Locked,

    /// Invalid caller input outside the crypto paths
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VaultError {
    /// Short, stable name of the error kind, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            VaultError::Derivation(_) => "derivation",
            VaultError::Encryption(_) => "encryption",
            VaultError::Decryption => "decryption",
            VaultError::Locked => "locked",
            VaultError::InvalidInput(_) => "invalid_input",
        }
    }
}
