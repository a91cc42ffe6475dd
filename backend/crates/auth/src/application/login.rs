//! Login Use Case
//!
//! Authenticates a user by email and password and issues a new access token.

use std::sync::Arc;

use kernel::validation::{FieldRules, FieldSource, Rule, RuleSet};

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Declarative rules for the login operation
static LOGIN_RULES: RuleSet = RuleSet::new(&[
    FieldRules {
        field: "email",
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRules {
        field: "password",
        rules: &[Rule::Required],
    },
]);

/// Login input
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldSource for LoginInput {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "email" => self.email.as_deref(),
            "password" => self.password.as_deref(),
            _ => None,
        }
    }
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// The authenticated user
    pub user: User,
    /// Plaintext access token, returned to the client exactly once
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> LoginUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            token_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let errors = LOGIN_RULES.check(&input);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        // Every failure from here on is the same uniform error; a caller
        // cannot tell an unknown email from a wrong password.
        let email = Email::new(input.email.unwrap_or_default())
            .map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password = RawPassword::new(input.password.unwrap_or_default())
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // A fresh token per login; prior tokens stay valid (multi-device)
        let issuer = TokenIssuer::new(self.token_repo.clone());
        let token = issuer.issue(user.user_id, user.email.as_str()).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User logged in"
        );

        Ok(LoginOutput { user, token })
    }
}
