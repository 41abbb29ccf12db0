//! Password-based key derivation.
//!
//! Turns a password plus the server-issued salt into a `DerivedKey`.
//! PBKDF2-HMAC-SHA256 at 600,000 iterations is the default, matching the
//! envelopes already stored by existing clients. Argon2id is available as a
//! memory-hard alternative.
//!
//! Parameters may be raised but never lowered below the floors defined here.

use std::time::Instant;

use argon2::Argon2;
use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::key::{DerivedKey, KEY_LENGTH};
use super::salt::Salt;
use crate::error::{Result, VaultError};

/// Minimum PBKDF2-HMAC-SHA256 iteration count.
pub const PBKDF2_MIN_ITERATIONS: u32 = 600_000;

/// Argon2id floors: 64 MB memory, 3 passes, 1 lane.
pub const ARGON2_MIN_MEMORY_KIB: u32 = 64 * 1024;
pub const ARGON2_MIN_TIME_COST: u32 = 3;
pub const ARGON2_MIN_PARALLELISM: u32 = 1;

/// Key derivation function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KdfAlgorithm {
    #[default]
    Pbkdf2Sha256,
    Argon2id,
}

impl std::fmt::Display for KdfAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KdfAlgorithm::Pbkdf2Sha256 => write!(f, "pbkdf2_sha256"),
            KdfAlgorithm::Argon2id => write!(f, "argon2id"),
        }
    }
}

/// Cost parameters for key derivation.
///
/// `iterations` applies to PBKDF2; `memory_kib`, `time_cost` and
/// `parallelism` apply to Argon2id. Unused fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    pub algorithm: KdfAlgorithm,
    pub iterations: u32,
    pub memory_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            algorithm: KdfAlgorithm::Pbkdf2Sha256,
            iterations: PBKDF2_MIN_ITERATIONS,
            memory_kib: ARGON2_MIN_MEMORY_KIB,
            time_cost: ARGON2_MIN_TIME_COST,
            parallelism: ARGON2_MIN_PARALLELISM,
        }
    }
}

impl KdfParams {
    /// Default Argon2id parameters.
    pub fn argon2id() -> Self {
        Self {
            algorithm: KdfAlgorithm::Argon2id,
            ..Self::default()
        }
    }

    /// Reject any cost parameter below its floor.
    pub fn validate(&self) -> Result<()> {
        match self.algorithm {
            KdfAlgorithm::Pbkdf2Sha256 => {
                if self.iterations < PBKDF2_MIN_ITERATIONS {
                    return Err(VaultError::Derivation(format!(
                        "PBKDF2 iterations must be at least {} (got {})",
                        PBKDF2_MIN_ITERATIONS, self.iterations
                    )));
                }
            }
            KdfAlgorithm::Argon2id => {
                if self.memory_kib < ARGON2_MIN_MEMORY_KIB {
                    return Err(VaultError::Derivation(format!(
                        "Argon2id memory must be at least {} KiB (got {})",
                        ARGON2_MIN_MEMORY_KIB, self.memory_kib
                    )));
                }
                if self.time_cost < ARGON2_MIN_TIME_COST {
                    return Err(VaultError::Derivation(format!(
                        "Argon2id time cost must be at least {} (got {})",
                        ARGON2_MIN_TIME_COST, self.time_cost
                    )));
                }
                if self.parallelism < ARGON2_MIN_PARALLELISM {
                    return Err(VaultError::Derivation(format!(
                        "Argon2id parallelism must be at least {} (got {})",
                        ARGON2_MIN_PARALLELISM, self.parallelism
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Derive a vault key from a password and a base64-encoded salt.
///
/// Uses the default parameters (PBKDF2-HMAC-SHA256, 600,000 iterations).
///
/// # Security
///
/// - Same password + salt always produces an interchangeable key
/// - The salt is decoded strictly; malformed input is an error, never truncated
/// - The returned handle cannot export its key bytes
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use zkvault_core::crypto::derive_key;
///
/// let password = SecretString::from("Tr0ub4dor&3");
/// let key = derive_key(&password, "AQIDBAUGBwgJCgsMDQ4PEA==").unwrap();
/// ```
pub fn derive_key(password: &SecretString, salt_b64: &str) -> Result<DerivedKey> {
    let salt = Salt::from_base64(salt_b64)?;
    derive_key_with_params(password, &salt, &KdfParams::default())
}

/// Derive a vault key with explicit parameters.
pub fn derive_key_with_params(
    password: &SecretString,
    salt: &Salt,
    params: &KdfParams,
) -> Result<DerivedKey> {
    let password = password.expose_secret();
    if password.is_empty() {
        return Err(VaultError::Derivation("Password cannot be empty".to_string()));
    }
    if salt.is_empty() {
        return Err(VaultError::Derivation("Salt cannot be empty".to_string()));
    }
    params.validate()?;

    let started = Instant::now();
    let mut key_bytes = Zeroizing::new([0u8; KEY_LENGTH]);

    match params.algorithm {
        KdfAlgorithm::Pbkdf2Sha256 => {
            pbkdf2_hmac::<Sha256>(
                password.as_bytes(),
                salt.as_bytes(),
                params.iterations,
                key_bytes.as_mut_slice(),
            );
        }
        KdfAlgorithm::Argon2id => {
            let argon_params = argon2::Params::new(
                params.memory_kib,
                params.time_cost,
                params.parallelism,
                Some(KEY_LENGTH),
            )
            .map_err(|e| VaultError::Derivation(format!("Invalid Argon2 params: {}", e)))?;

            let argon2 =
                Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, argon_params);
            argon2
                .hash_password_into(password.as_bytes(), salt.as_bytes(), key_bytes.as_mut_slice())
                .map_err(|e| VaultError::Derivation(format!("Argon2id failed: {}", e)))?;
        }
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match params.algorithm {
        KdfAlgorithm::Pbkdf2Sha256 => tracing::debug!(
            algorithm = %params.algorithm,
            iterations = params.iterations,
            elapsed_ms,
            "derived vault key"
        ),
        KdfAlgorithm::Argon2id => tracing::debug!(
            algorithm = %params.algorithm,
            memory_kib = params.memory_kib,
            time_cost = params.time_cost,
            parallelism = params.parallelism,
            elapsed_ms,
            "derived vault key"
        ),
    }

    Ok(DerivedKey::from_key_bytes(&key_bytes, params.algorithm))
}

/// Derive a vault key on the blocking thread pool.
///
/// Derivation is deliberately slow, so async callers should use this to keep
/// their executor responsive. The computation itself cannot be interrupted;
/// dropping the returned future only discards its result.
pub async fn derive_key_async(
    password: SecretString,
    salt_b64: String,
    params: KdfParams,
) -> Result<DerivedKey> {
    tokio::task::spawn_blocking(move || {
        let salt = Salt::from_base64(&salt_b64)?;
        derive_key_with_params(&password, &salt, &params)
    })
    .await
    .map_err(|e| VaultError::Derivation(format!("Derivation task failed: {}", e)))?
}
