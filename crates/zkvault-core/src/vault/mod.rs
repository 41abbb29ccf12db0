//! Vault codec: authenticated encryption of UTF-8 plaintext into
//! self-contained JSON envelopes.

pub mod codec;
pub mod envelope;

pub use codec::{decrypt, decrypt_envelope, encrypt, encrypt_envelope};
pub use envelope::{EncryptedEnvelope, NONCE_LENGTH, TAG_LENGTH};
