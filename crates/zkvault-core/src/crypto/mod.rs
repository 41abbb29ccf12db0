//! Key derivation for zkvault.
//!
//! ## Security Model
//!
//! - The password never leaves the client and is carried as `SecretString`
//! - The salt is issued by the identity service and only decoded here
//! - PBKDF2-HMAC-SHA256 (600,000 iterations) by default, Argon2id optional
//! - The derived key is a non-extractable handle, zeroized on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of stored vault envelopes
//! - Offline brute-force attacks on the password
//! - Application code reading key bytes out of a live handle
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Code that can call encrypt/decrypt with an unlocked session

pub mod kdf;
pub mod key;
pub mod salt;

pub use kdf::{derive_key, derive_key_async, derive_key_with_params, KdfAlgorithm, KdfParams};
pub use key::DerivedKey;
pub use salt::Salt;
