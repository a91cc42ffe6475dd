//! Register Use Case
//!
//! Creates a new user account and issues its first access token.

use std::sync::Arc;

use kernel::validation::{ErrorBag, FieldRules, FieldSource, Rule, RuleSet};

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Message for the persistence-backed uniqueness rule
pub(crate) const EMAIL_TAKEN_MESSAGE: &str = "The email has already been taken.";

/// Declarative rules for the register operation
static REGISTER_RULES: RuleSet = RuleSet::new(&[
    FieldRules {
        field: "name",
        rules: &[Rule::Required, Rule::MaxChars(250)],
    },
    FieldRules {
        field: "email",
        rules: &[Rule::Required, Rule::Email, Rule::MaxChars(250)],
    },
    FieldRules {
        field: "password",
        rules: &[Rule::Required, Rule::MinChars(8), Rule::Confirmed],
    },
]);

/// Register input
///
/// Fields are optional so that missing values surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl FieldSource for RegisterInput {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            "password" => self.password.as_deref(),
            "password_confirmation" => self.password_confirmation.as_deref(),
            _ => None,
        }
    }
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// The created user
    pub user: User,
    /// Plaintext access token, returned to the client exactly once
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> RegisterUseCase<U, T>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // All rules run before any persistence; the returned error map is
        // always the complete set, uniqueness included.
        let mut errors = REGISTER_RULES.check(&input);

        if let Some(raw_email) = input.email.as_deref() {
            if let Ok(email) = Email::new(raw_email) {
                if self.user_repo.exists_by_email(&email).await? {
                    errors.add("email", EMAIL_TAKEN_MESSAGE);
                }
            }
        }

        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        // Rules guarantee presence; the defaults below are unreachable
        let name = UserName::new(input.name.unwrap_or_default())
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let email = Email::new(input.email.unwrap_or_default())
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let raw_password = RawPassword::new(input.password.unwrap_or_default())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(name, email, password_hash);

        match self.user_repo.create(&user).await {
            Ok(()) => {}
            Err(AuthError::EmailTaken) => {
                // Lost the uniqueness race between the pre-check and the
                // insert; same failure shape as the pre-check.
                let mut errors = ErrorBag::new();
                errors.add("email", EMAIL_TAKEN_MESSAGE);
                return Err(AuthError::Validation(errors));
            }
            Err(e) => return Err(e),
        }

        let issuer = TokenIssuer::new(self.token_repo.clone());
        let token = issuer.issue(user.user_id, user.email.as_str()).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
