//! Access Token Entity
//!
//! Opaque bearer credential bound to a user. Only the SHA-256 digest of the
//! secret is persisted; the plaintext token is handed to the client exactly
//! once at mint time and cannot be recovered afterwards.
//!
//! Wire format of the plaintext token: `"{token_id}.{base64url(secret)}"`.
//! The id half allows a direct registry lookup, the secret half is compared
//! in constant time against the stored digest.

use chrono::{DateTime, Utc};
use platform::crypto::{constant_time_eq, sha256, to_base64url};
use rand::RngCore;
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Secret length in bytes (256 bits of entropy)
pub const TOKEN_SECRET_LEN: usize = 32;

/// Access token entity
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Token ID (UUID v4)
    pub token_id: Uuid,
    /// Owning user (non-owning back-reference)
    pub user_id: UserId,
    /// Label for the token; the owner's email at issuance
    pub name: String,
    /// SHA-256 digest of the secret half of the plaintext token
    pub secret_hash: Vec<u8>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// Mint a new token for a user
    ///
    /// Returns the entity to persist and the plaintext token. The plaintext
    /// is the only copy; it is not retrievable again.
    pub fn mint(user_id: UserId, name: impl Into<String>) -> (Self, String) {
        let token_id = Uuid::new_v4();

        let mut secret = [0u8; TOKEN_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        let secret_b64 = to_base64url(&secret);

        let token = Self {
            token_id,
            user_id,
            name: name.into(),
            secret_hash: sha256(secret_b64.as_bytes()).to_vec(),
            created_at: Utc::now(),
        };

        let plaintext = format!("{}.{}", token_id, secret_b64);
        (token, plaintext)
    }

    /// Verify the secret half of a presented token
    ///
    /// Constant-time digest comparison.
    pub fn verify_secret(&self, candidate: &str) -> bool {
        let digest = sha256(candidate.as_bytes());
        constant_time_eq(&digest, &self.secret_hash)
    }

    /// Split a presented bearer token into `(token_id, secret)`
    ///
    /// Returns `None` for anything that is not `"{uuid}.{secret}"`.
    pub fn parse_bearer(token: &str) -> Option<(Uuid, &str)> {
        let (id_str, secret) = token.split_once('.')?;
        if secret.is_empty() {
            return None;
        }
        let token_id = id_str.parse().ok()?;
        Some((token_id, secret))
    }
}
