//! The stored vault envelope.
//!
//! Wire format is a JSON object with exactly two string fields:
//!
//! ```json
//! {"iv":"<base64, 12 bytes>","ciphertext":"<base64, ciphertext || 16-byte tag>"}
//! ```
//!
//! Unknown fields are ignored on read so a later writer can add fields
//! without breaking older readers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// AES-GCM nonce length in bytes (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Nonce and ciphertext, both base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    pub iv: String,
    pub ciphertext: String,
}

impl EncryptedEnvelope {
    pub(crate) fn from_parts(nonce: &[u8; NONCE_LENGTH], ciphertext: &[u8]) -> Self {
        Self {
            iv: STANDARD.encode(nonce),
            ciphertext: STANDARD.encode(ciphertext),
        }
    }

    /// Parse an envelope string.
    ///
    /// Fails with `VaultError::Decryption` on anything that is not a JSON
    /// object carrying both fields as strings.
    pub fn from_json(envelope: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(envelope).map_err(|_| VaultError::Decryption)?;
        if !value.is_object() {
            return Err(VaultError::Decryption);
        }
        serde_json::from_value(value).map_err(|_| VaultError::Decryption)
    }

    /// Serialize to the compact wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| VaultError::Encryption(format!("Envelope serialization failed: {}", e)))
    }

    /// Pretty-printed form for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VaultError::Encryption(format!("Envelope serialization failed: {}", e)))
    }

    /// Decode the nonce, requiring exactly 12 bytes.
    pub fn nonce_bytes(&self) -> Result<[u8; NONCE_LENGTH]> {
        let decoded = STANDARD
            .decode(self.iv.as_bytes())
            .map_err(|_| VaultError::Decryption)?;
        decoded.try_into().map_err(|_| VaultError::Decryption)
    }

    /// Decode the ciphertext, requiring room for at least the tag.
    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>> {
        let decoded = STANDARD
            .decode(self.ciphertext.as_bytes())
            .map_err(|_| VaultError::Decryption)?;
        if decoded.len() < TAG_LENGTH {
            return Err(VaultError::Decryption);
        }
        Ok(decoded)
    }

    /// Check the envelope's shape without a key.
    ///
    /// Returns the nonce length and ciphertext length (tag included).
    pub fn validate_shape(&self) -> Result<(usize, usize)> {
        let nonce = self.nonce_bytes()?;
        let ciphertext = self.ciphertext_bytes()?;
        Ok((nonce.len(), ciphertext.len()))
    }
}
