//! Identity service login response.
//!
//! The identity service returns the user's salt alongside their profile at
//! login (and on status checks). Only the shape is modeled here; fetching it
//! is the caller's job.

use serde::{Deserialize, Serialize};

use crate::crypto::Salt;
use crate::error::{Result, VaultError};

/// Profile returned by the identity service after authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub user_name: String,
    pub user_role: String,
    pub is_admin: bool,
    /// Base64 salt, fixed per user.
    pub user_salt: String,
}

impl AuthenticatedUser {
    /// Parse a login/status response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| VaultError::InvalidInput(format!("Invalid identity response: {}", e)))
    }

    /// Decode this user's salt for key derivation.
    pub fn salt(&self) -> Result<Salt> {
        Salt::from_base64(&self.user_salt)
    }
}

impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .field("user_role", &self.user_role)
            .field("is_admin", &self.is_admin)
            .field("user_salt", &"[REDACTED]")
            .finish()
    }
}
