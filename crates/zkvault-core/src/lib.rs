//! # zkvault Core
//!
//! Zero-knowledge client vault: the password never leaves the client, and
//! vault contents are encrypted locally with a key derived from the password
//! and a server-issued salt.
//!
//! ## Architecture
//!
//! - **crypto**: salt decoding, PBKDF2/Argon2id key derivation, key handle
//! - **vault**: AES-256-GCM envelope encryption and decryption
//! - **session**: in-memory holder for the session's key
//! - **identity**: login response carrying the user's salt
//!
//! Pipeline: password + salt → `DerivedKey` → plaintext ↔ envelope string.

pub mod crypto;
pub mod error;
pub mod identity;
pub mod session;
pub mod vault;

pub use crypto::{DerivedKey, KdfAlgorithm, KdfParams, Salt};
pub use error::{Result, VaultError};
pub use identity::AuthenticatedUser;
pub use session::{SessionInfo, SessionKeyHolder};
pub use vault::EncryptedEnvelope;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
