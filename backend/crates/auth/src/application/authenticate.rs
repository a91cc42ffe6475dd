//! Authenticate Token Use Case
//!
//! Resolves a presented bearer token to its owning user. Used by the
//! middleware that gates protected routes; handlers behind it receive an
//! already-verified identity.

use std::sync::Arc;

use crate::domain::entity::access_token::AccessToken;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Authenticate token use case
pub struct AuthenticateTokenUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
}

impl<U, T> AuthenticateTokenUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>) -> Self {
        Self {
            user_repo,
            token_repo,
        }
    }

    /// Resolve a bearer token to its user
    ///
    /// Any failure (malformed token, unknown id, digest mismatch) is the
    /// same `Unauthenticated` error.
    pub async fn execute(&self, bearer: &str) -> AuthResult<User> {
        let Some((token_id, secret)) = AccessToken::parse_bearer(bearer) else {
            return Err(AuthError::Unauthenticated);
        };

        let token = self
            .token_repo
            .find_by_id(token_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if !token.verify_secret(secret) {
            tracing::warn!(token_id = %token_id, "Bearer token digest mismatch");
            return Err(AuthError::Unauthenticated);
        }

        match self.user_repo.find_by_id(&token.user_id).await? {
            Some(user) => Ok(user),
            None => {
                // Tokens cascade-delete with their user; a dangling token is
                // a store inconsistency
                tracing::error!(token_id = %token_id, "Access token without owning user");
                Err(AuthError::Unauthenticated)
            }
        }
    }
}
