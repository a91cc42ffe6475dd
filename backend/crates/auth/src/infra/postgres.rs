//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL error code for unique constraint violations
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key violations
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn pg_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.to_string()),
        _ => None,
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The unique index is the authority on email uniqueness; a
            // conflicting concurrent insert is rejected here, never by a
            // read-then-write check.
            if pg_error_code(&e).as_deref() == Some(PG_UNIQUE_VIOLATION) {
                AuthError::EmailTaken
            } else {
                AuthError::from(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Access Token Repository Implementation
// ============================================================================

impl AccessTokenRepository for PgAuthRepository {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (
                token_id,
                user_id,
                name,
                secret_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.token_id)
        .bind(token.user_id.as_uuid())
        .bind(&token.name)
        .bind(&token.secret_hash)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if pg_error_code(&e).as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) {
                AuthError::UnknownUser
            } else {
                AuthError::from(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, token_id: Uuid) -> AuthResult<Option<AccessToken>> {
        let row = sqlx::query_as::<_, AccessTokenRow>(
            r#"
            SELECT
                token_id,
                user_id,
                name,
                secret_hash,
                created_at
            FROM access_tokens
            WHERE token_id = $1
            "#,
        )
        .bind(token_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccessTokenRow::into_token))
    }

    async fn revoke_all_for_user(&self, user_id: &UserId) -> AuthResult<u64> {
        let revoked = sqlx::query("DELETE FROM access_tokens WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(revoked)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password_hash),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AccessTokenRow {
    token_id: Uuid,
    user_id: Uuid,
    name: String,
    secret_hash: Vec<u8>,
    created_at: DateTime<Utc>,
}

impl AccessTokenRow {
    fn into_token(self) -> AccessToken {
        AccessToken {
            token_id: self.token_id,
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            secret_hash: self.secret_hash,
            created_at: self.created_at,
        }
    }
}
