//! Token Issuer/Registry
//!
//! Creates opaque bearer tokens bound to a user and revokes them in bulk.
//! The secret leaves this component exactly once, as the return value of
//! `issue`; only its digest is persisted.

use std::sync::Arc;

use crate::domain::entity::access_token::AccessToken;
use crate::domain::repository::AccessTokenRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Token issuer over an access-token repository
pub struct TokenIssuer<T>
where
    T: AccessTokenRepository,
{
    token_repo: Arc<T>,
}

impl<T> TokenIssuer<T>
where
    T: AccessTokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self { token_repo }
    }

    /// Mint and persist a new token; returns the plaintext exactly once
    ///
    /// A user may hold multiple concurrent tokens (multi-device sessions);
    /// issuing never touches previously issued tokens.
    pub async fn issue(&self, user_id: UserId, label: &str) -> AuthResult<String> {
        let (token, plaintext) = AccessToken::mint(user_id, label);
        self.token_repo.create(&token).await?;

        tracing::info!(
            token_id = %token.token_id,
            user_id = %user_id,
            "Access token issued"
        );

        Ok(plaintext)
    }

    /// Delete every token owned by the user
    ///
    /// Idempotent: revoking with no outstanding tokens succeeds silently.
    pub async fn revoke_all(&self, user_id: UserId) -> AuthResult<u64> {
        let revoked = self.token_repo.revoke_all_for_user(&user_id).await?;

        tracing::info!(
            user_id = %user_id,
            revoked = revoked,
            "Access tokens revoked"
        );

        Ok(revoked)
    }
}
