//! Server-issued salt handling.
//!
//! The salt belongs to the identity service. The client only decodes it;
//! it is never generated, padded, or truncated here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, VaultError};

/// Decoded per-user salt bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt {
    bytes: Vec<u8>,
}

impl Salt {
    /// Decode a salt from standard, padded base64.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Derivation` if the input is empty, is not valid
    /// base64, or decodes to zero bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use zkvault_core::crypto::Salt;
    ///
    /// let salt = Salt::from_base64("AQIDBAUGBwgJCgsMDQ4PEA==").unwrap();
    /// assert_eq!(salt.len(), 16);
    /// assert!(Salt::from_base64("not base64!").is_err());
    /// ```
    pub fn from_base64(encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(VaultError::Derivation("Salt cannot be empty".to_string()));
        }
        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| VaultError::Derivation(format!("Salt is not valid base64: {}", e)))?;
        Self::from_bytes(bytes)
    }

    /// Wrap already-decoded salt bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(VaultError::Derivation("Salt cannot be empty".to_string()));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode back to the wire form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Salt")
            .field("len", &self.bytes.len())
            .finish()
    }
}
