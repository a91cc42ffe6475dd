//! Logout Use Case
//!
//! Revokes every access token held by the user: logout means logging out
//! everywhere, not just the presenting device.
//!
//! The authenticated user's identity is an explicit parameter. There is no
//! ambient current-user state; the middleware resolves the bearer token and
//! the caller passes the identity in.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::repository::AccessTokenRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<T>
where
    T: AccessTokenRepository,
{
    token_repo: Arc<T>,
}

impl<T> LogoutUseCase<T>
where
    T: AccessTokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self { token_repo }
    }

    /// Revoke all tokens of the authenticated user
    ///
    /// Always succeeds for an authenticated caller; revoking zero tokens is
    /// still success.
    pub async fn execute(&self, user_id: UserId) -> AuthResult<u64> {
        let issuer = TokenIssuer::new(self.token_repo.clone());
        let revoked = issuer.revoke_all(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            revoked = revoked,
            "User logged out"
        );

        Ok(revoked)
    }
}
