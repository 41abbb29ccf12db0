//! Non-extractable vault key handle.
//!
//! A `DerivedKey` owns an initialized AES-256-GCM cipher and nothing else.
//! The raw key bytes exist only inside `derive_key` and are zeroized before
//! the handle is returned. The cipher lives on the heap so moving the handle
//! never copies the key schedule, and the schedule is zeroized on drop (the
//! `aes` crate's `zeroize` feature). There is no accessor for key material,
//! no `Clone`, and no `Serialize`.

use aes_gcm::{Aes256Gcm, Key, KeyInit};
use zeroize::Zeroizing;

use super::kdf::KdfAlgorithm;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256-GCM).
pub const KEY_LENGTH: usize = 32;

/// An opaque AES-256-GCM key derived from a password.
///
/// The handle can be used to encrypt and decrypt vault envelopes but can
/// never be read back out. Dropping it destroys the key.
pub struct DerivedKey {
    cipher: Box<Aes256Gcm>,
    algorithm: KdfAlgorithm,
}

impl DerivedKey {
    /// Build the handle from freshly derived bytes. The buffer is wiped when
    /// the caller's `Zeroizing` goes out of scope.
    pub(crate) fn from_key_bytes(
        bytes: &Zeroizing<[u8; KEY_LENGTH]>,
        algorithm: KdfAlgorithm,
    ) -> Self {
        let key = Key::<Aes256Gcm>::from_slice(bytes.as_slice());
        Self {
            cipher: Box::new(Aes256Gcm::new(key)),
            algorithm,
        }
    }

    pub(crate) fn cipher(&self) -> &Aes256Gcm {
        &self.cipher
    }

    /// The KDF that produced this key.
    pub fn algorithm(&self) -> KdfAlgorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("algorithm", &self.algorithm)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{size_of, MaybeUninit};

    use super::*;

    fn raw_key_windows(memory: &[u8], fill: u8) -> usize {
        memory.windows(4).filter(|w| w.iter().all(|b| *b == fill)).count()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_derived_key_is_shareable() {
        assert_send_sync::<DerivedKey>();
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let bytes = Zeroizing::new([0x5Au8; KEY_LENGTH]);
        let key = DerivedKey::from_key_bytes(&bytes, KdfAlgorithm::Pbkdf2Sha256);

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("Pbkdf2Sha256"));

        // Neither hex nor decimal renderings of the key bytes may appear
        let key_hex = hex::encode(&bytes[..4]);
        assert!(!debug_output.contains(&key_hex));
        assert!(!debug_output.contains("90, 90"));
    }

    #[test]
    fn test_key_schedule_wiped_on_drop() {
        let bytes = Zeroizing::new([0x5Au8; KEY_LENGTH]);
        let mut slot = MaybeUninit::<Aes256Gcm>::uninit();
        slot.write(Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(bytes.as_slice())));

        // SAFETY: the slot was initialized above and is dropped exactly once.
        // The storage stays owned by `slot`, so scanning it afterwards reads
        // valid memory.
        let remaining = unsafe {
            slot.assume_init_drop();
            std::slice::from_raw_parts(slot.as_ptr() as *const u8, size_of::<Aes256Gcm>())
        };
        assert_eq!(raw_key_windows(remaining, 0x5A), 0);
    }

    #[test]
    fn test_handle_does_not_carry_key_schedule_inline() {
        // Moving a DerivedKey copies a pointer, not the round keys
        assert!(size_of::<DerivedKey>() <= 2 * size_of::<usize>());
    }
}
