//! Volatile session key holder.
//!
//! Holds at most one `DerivedKey` for the active session. The holder lives
//! only in process memory: it is neither `Clone` nor `Serialize`, and
//! dropping it (or calling `clear`) destroys the key. A restart always
//! requires the password again.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use uuid::Uuid;

use crate::crypto::{derive_key_with_params, DerivedKey, KdfAlgorithm, KdfParams, Salt};
use crate::error::{Result, VaultError};
use crate::vault::{self, EncryptedEnvelope};

/// Non-sensitive facts about the current session, safe to log or display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub id: Uuid,
    pub unlocked_at: DateTime<Utc>,
    pub algorithm: KdfAlgorithm,
}

struct Unlocked {
    key: DerivedKey,
    info: SessionInfo,
}

/// In-memory owner of the session's vault key.
///
/// Writes (`set`, `clear`, `unlock`) take `&mut self`; the last one wins.
#[derive(Default)]
pub struct SessionKeyHolder {
    unlocked: Option<Unlocked>,
}

impl SessionKeyHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a key, dropping any key already held.
    pub fn set(&mut self, key: DerivedKey) -> &SessionInfo {
        let info = SessionInfo {
            id: Uuid::new_v4(),
            unlocked_at: Utc::now(),
            algorithm: key.algorithm(),
        };
        tracing::info!(session = %info.id, algorithm = %info.algorithm, "vault session unlocked");
        let unlocked = self.unlocked.insert(Unlocked { key, info });
        &unlocked.info
    }

    /// Derive a key from the password and base64 salt, then hold it.
    ///
    /// On failure the holder is left exactly as it was.
    pub fn unlock(
        &mut self,
        password: &SecretString,
        salt_b64: &str,
        params: &KdfParams,
    ) -> Result<&SessionInfo> {
        let salt = Salt::from_base64(salt_b64)?;
        let key = derive_key_with_params(password, &salt, params)?;
        Ok(self.set(key))
    }

    /// Drop the held key, if any.
    pub fn clear(&mut self) {
        if let Some(unlocked) = self.unlocked.take() {
            tracing::info!(session = %unlocked.info.id, "vault session cleared");
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked.is_some()
    }

    /// Borrow the held key for use. The key itself cannot be copied out.
    pub fn key(&self) -> Option<&DerivedKey> {
        self.unlocked.as_ref().map(|u| &u.key)
    }

    pub fn session(&self) -> Option<&SessionInfo> {
        self.unlocked.as_ref().map(|u| &u.info)
    }

    /// Encrypt with the session key.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let key = self.key().ok_or(VaultError::Locked)?;
        vault::encrypt(plaintext, key)
    }

    /// Encrypt with the session key, returning the typed envelope.
    pub fn encrypt_envelope(&self, plaintext: &str) -> Result<EncryptedEnvelope> {
        let key = self.key().ok_or(VaultError::Locked)?;
        vault::encrypt_envelope(plaintext, key)
    }

    /// Decrypt with the session key.
    pub fn decrypt(&self, envelope: &str) -> Result<String> {
        let key = self.key().ok_or(VaultError::Locked)?;
        vault::decrypt(envelope, key)
    }
}

impl std::fmt::Debug for SessionKeyHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeyHolder")
            .field("session", &self.session())
            .finish()
    }
}
