//! User Entity
//!
//! Identity record of the credential store. Created on register, read on
//! login, never mutated by this core.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Email (globally unique, used as login key)
    pub email: Email,
    /// Argon2id password hash; plaintext is unrecoverable
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
