//! AES-256-GCM vault encryption and decryption.
//!
//! Every call to `encrypt` draws a fresh 96-bit nonce from the OS CSPRNG.
//! No function here accepts a caller-supplied nonce.
//!
//! Every decryption failure is reported as `VaultError::Decryption`, whatever
//! the cause, so a caller cannot distinguish a wrong key from tampering.

use aes_gcm::aead::Aead;
use aes_gcm::Nonce;

use super::envelope::{EncryptedEnvelope, NONCE_LENGTH};
use crate::crypto::DerivedKey;
use crate::error::{Result, VaultError};

/// Encrypt plaintext into a typed envelope.
pub fn encrypt_envelope(plaintext: &str, key: &DerivedKey) -> Result<EncryptedEnvelope> {
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    getrandom::getrandom(&mut nonce_bytes)
        .map_err(|e| VaultError::Encryption(format!("Failed to generate nonce: {}", e)))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = key
        .cipher()
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|_| VaultError::Encryption("Cipher operation failed".to_string()))?;

    Ok(EncryptedEnvelope::from_parts(&nonce_bytes, &ciphertext))
}

/// Encrypt plaintext into an envelope string ready to store.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use zkvault_core::crypto::derive_key;
/// use zkvault_core::vault::{decrypt, encrypt};
///
/// let key = derive_key(&SecretString::from("Tr0ub4dor&3"), "AQIDBAUGBwgJCgsMDQ4PEA==").unwrap();
/// let envelope = encrypt("CONFIDENTIAL-FINDING-42", &key).unwrap();
/// assert_eq!(decrypt(&envelope, &key).unwrap(), "CONFIDENTIAL-FINDING-42");
/// ```
pub fn encrypt(plaintext: &str, key: &DerivedKey) -> Result<String> {
    encrypt_envelope(plaintext, key)?.to_json()
}

/// Decrypt a typed envelope.
pub fn decrypt_envelope(envelope: &EncryptedEnvelope, key: &DerivedKey) -> Result<String> {
    let result = open(envelope, key);
    if result.is_err() {
        tracing::warn!("vault decryption failed");
    }
    result
}

/// Decrypt an envelope string produced by `encrypt`.
pub fn decrypt(envelope: &str, key: &DerivedKey) -> Result<String> {
    let result = EncryptedEnvelope::from_json(envelope).and_then(|parsed| open(&parsed, key));
    if result.is_err() {
        tracing::warn!("vault decryption failed");
    }
    result
}

fn open(envelope: &EncryptedEnvelope, key: &DerivedKey) -> Result<String> {
    let nonce_bytes = envelope.nonce_bytes()?;
    let ciphertext = envelope.ciphertext_bytes()?;

    let plaintext = key
        .cipher()
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_slice())
        .map_err(|_| VaultError::Decryption)?;

    String::from_utf8(plaintext).map_err(|_| VaultError::Decryption)
}
