//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already
    /// registered (atomic reject-on-conflict, not read-then-write).
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Access token repository trait
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    /// Persist a newly minted token
    ///
    /// Fails with `AuthError::UnknownUser` when the owning user does not
    /// exist.
    async fn create(&self, token: &AccessToken) -> AuthResult<()>;

    /// Find token by ID
    async fn find_by_id(&self, token_id: Uuid) -> AuthResult<Option<AccessToken>>;

    /// Delete every token owned by a user; returns the number deleted.
    /// Idempotent - zero deletions is success.
    async fn revoke_all_for_user(&self, user_id: &UserId) -> AuthResult<u64>;
}
