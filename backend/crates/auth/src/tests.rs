//! Unit tests for the Auth crate
//!
//! Use-case flows run against an in-memory repository so the full
//! register/login/logout lifecycle is covered without a database.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateTokenUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterOutput, RegisterUseCase, TokenIssuer,
};
use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use uuid::Uuid;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemAuthStore {
    users: Arc<Mutex<Vec<User>>>,
    tokens: Arc<Mutex<Vec<AccessToken>>>,
}

impl MemAuthStore {
    fn token_count_for(&self, user_id: &UserId) -> usize {
        self.tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == *user_id)
            .count()
    }

    fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for MemAuthStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        // Same reject-on-conflict contract as the unique index
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == *email))
    }
}

impl AccessTokenRepository for MemAuthStore {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        // Same referential contract as the foreign key
        let owner_exists = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.user_id == token.user_id);
        if !owner_exists {
            return Err(AuthError::UnknownUser);
        }
        self.tokens.lock().unwrap().push(token.clone());
        Ok(())
    }

    async fn find_by_id(&self, token_id: Uuid) -> AuthResult<Option<AccessToken>> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_id == token_id)
            .cloned())
    }

    async fn revoke_all_for_user(&self, user_id: &UserId) -> AuthResult<u64> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.user_id != *user_id);
        Ok((before - tokens.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::default())
}

fn register_input(name: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        password_confirmation: Some(password.to_string()),
    }
}

async fn register(store: &Arc<MemAuthStore>, email: &str) -> RegisterOutput {
    RegisterUseCase::new(store.clone(), store.clone(), config())
        .execute(register_input("A", email, "password1"))
        .await
        .unwrap()
}

// ============================================================================
// Register / Login flows
// ============================================================================

#[cfg(test)]
mod auth_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login_succeeds() {
        let store = Arc::new(MemAuthStore::default());

        let registered = register(&store, "a@x.com").await;
        assert!(!registered.token.is_empty());

        let login = LoginUseCase::new(store.clone(), store.clone(), config())
            .execute(LoginInput {
                email: Some("a@x.com".to_string()),
                password: Some("password1".to_string()),
            })
            .await
            .unwrap();

        // A fresh, distinct token per login
        assert_ne!(login.token, registered.token);
        assert_eq!(login.user.user_id, registered.user.user_id);
        assert_eq!(store.token_count_for(&registered.user.user_id), 2);
    }

    #[tokio::test]
    async fn test_registered_password_hash_verifies() {
        use crate::domain::value_object::user_password::RawPassword;

        let store = Arc::new(MemAuthStore::default());
        let registered = register(&store, "a@x.com").await;

        // The stored hash verifies the original password and nothing else
        let correct = RawPassword::new("password1".to_string()).unwrap();
        let wrong = RawPassword::new("password2".to_string()).unwrap();
        assert!(registered.user.password_hash.verify(&correct, None));
        assert!(!registered.user.password_hash.verify(&wrong, None));
    }

    #[tokio::test]
    async fn test_registered_token_authenticates() {
        let store = Arc::new(MemAuthStore::default());
        let registered = register(&store, "a@x.com").await;

        let user = AuthenticateTokenUseCase::new(store.clone(), store.clone())
            .execute(&registered.token)
            .await
            .unwrap();

        assert_eq!(user.user_id, registered.user.user_id);
    }

    #[tokio::test]
    async fn test_login_is_uniform_for_unknown_email_and_wrong_password() {
        let store = Arc::new(MemAuthStore::default());
        register(&store, "a@x.com").await;

        let use_case = LoginUseCase::new(store.clone(), store.clone(), config());

        let wrong_password = use_case
            .execute(LoginInput {
                email: Some("a@x.com".to_string()),
                password: Some("wrongwrong".to_string()),
            })
            .await
            .unwrap_err();

        let unknown_email = use_case
            .execute(LoginInput {
                email: Some("nobody@x.com".to_string()),
                password: Some("password1".to_string()),
            })
            .await
            .unwrap_err();

        // No distinguishing information is leaked
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_validation_and_keeps_one_user() {
        let store = Arc::new(MemAuthStore::default());
        register(&store, "a@x.com").await;

        let err = RegisterUseCase::new(store.clone(), store.clone(), config())
            .execute(register_input("B", "a@x.com", "password2"))
            .await
            .unwrap_err();

        match err {
            AuthError::Validation(errors) => {
                assert_eq!(
                    errors.get("email").unwrap(),
                    &["The email has already been taken.".to_string()]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_register_returns_complete_error_set() {
        let store = Arc::new(MemAuthStore::default());

        let err = RegisterUseCase::new(store.clone(), store.clone(), config())
            .execute(RegisterInput {
                name: None,
                email: Some("not-an-email".to_string()),
                password: Some("short".to_string()),
                password_confirmation: Some("other".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            AuthError::Validation(errors) => {
                // All failing fields at once, not just the first
                assert_eq!(errors.len(), 3);
                assert!(errors.get("name").is_some());
                assert!(errors.get("email").is_some());
                assert_eq!(errors.get("password").unwrap().len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        // No side effects on validation failure
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_password_confirmation_must_match() {
        let store = Arc::new(MemAuthStore::default());

        let err = RegisterUseCase::new(store.clone(), store.clone(), config())
            .execute(RegisterInput {
                name: Some("A".to_string()),
                email: Some("a@x.com".to_string()),
                password: Some("password1".to_string()),
                password_confirmation: Some("password2".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            AuthError::Validation(errors) => {
                assert_eq!(
                    errors.get("password").unwrap(),
                    &["The password confirmation does not match.".to_string()]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_missing_password_is_validation_not_credentials() {
        let store = Arc::new(MemAuthStore::default());
        register(&store, "a@x.com").await;

        let err = LoginUseCase::new(store.clone(), store.clone(), config())
            .execute(LoginInput {
                email: Some("a@x.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
    }
}

// ============================================================================
// Token registry / logout
// ============================================================================

#[cfg(test)]
mod token_tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke_all_is_scoped_to_one_user() {
        let store = Arc::new(MemAuthStore::default());

        let a = register(&store, "a@x.com").await;
        let b = register(&store, "b@x.com").await;

        // A accumulates multi-device sessions
        let login = LoginUseCase::new(store.clone(), store.clone(), config());
        for _ in 0..3 {
            login
                .execute(LoginInput {
                    email: Some("a@x.com".to_string()),
                    password: Some("password1".to_string()),
                })
                .await
                .unwrap();
        }
        assert_eq!(store.token_count_for(&a.user.user_id), 4);

        let revoked = LogoutUseCase::new(store.clone())
            .execute(a.user.user_id)
            .await
            .unwrap();

        assert_eq!(revoked, 4);
        assert_eq!(store.token_count_for(&a.user.user_id), 0);
        // Other users' tokens are untouched
        assert_eq!(store.token_count_for(&b.user.user_id), 1);
    }

    #[tokio::test]
    async fn test_revoke_all_is_idempotent() {
        let store = Arc::new(MemAuthStore::default());
        let a = register(&store, "a@x.com").await;

        let use_case = LogoutUseCase::new(store.clone());
        assert_eq!(use_case.execute(a.user.user_id).await.unwrap(), 1);
        assert_eq!(use_case.execute(a.user.user_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_logout_invalidates_previously_issued_tokens() {
        let store = Arc::new(MemAuthStore::default());
        let registered = register(&store, "a@x.com").await;

        let login = LoginUseCase::new(store.clone(), store.clone(), config())
            .execute(LoginInput {
                email: Some("a@x.com".to_string()),
                password: Some("password1".to_string()),
            })
            .await
            .unwrap();

        let authenticate = AuthenticateTokenUseCase::new(store.clone(), store.clone());
        assert!(authenticate.execute(&registered.token).await.is_ok());
        assert!(authenticate.execute(&login.token).await.is_ok());

        LogoutUseCase::new(store.clone())
            .execute(registered.user.user_id)
            .await
            .unwrap();

        // Every outstanding token is dead, not just the presenting one
        let err = authenticate.execute(&registered.token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
        let err = authenticate.execute(&login.token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_tampered_token_is_rejected() {
        let store = Arc::new(MemAuthStore::default());
        let registered = register(&store, "a@x.com").await;

        let (token_id, _) = AccessToken::parse_bearer(&registered.token).unwrap();
        let tampered = format!("{}.{}", token_id, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");

        let err = AuthenticateTokenUseCase::new(store.clone(), store.clone())
            .execute(&tampered)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_malformed_bearer_is_rejected() {
        let store = Arc::new(MemAuthStore::default());
        let authenticate = AuthenticateTokenUseCase::new(store.clone(), store.clone());

        for bearer in ["", "garbage", "no-uuid.secret"] {
            let err = authenticate.execute(bearer).await.unwrap_err();
            assert!(matches!(err, AuthError::Unauthenticated));
        }
    }

    #[tokio::test]
    async fn test_issue_for_unknown_user_is_internal_fault() {
        let store = Arc::new(MemAuthStore::default());

        let err = TokenIssuer::new(store.clone())
            .issue(UserId::new(), "ghost@x.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UnknownUser));
    }
}

// ============================================================================
// Error mapping
// ============================================================================

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use kernel::validation::ErrorBag;

    #[test]
    fn test_error_status_codes() {
        let mut bag = ErrorBag::new();
        bag.add("email", "The email field is required.");

        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::Validation(bag), StatusCode::FORBIDDEN),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AuthError::UnknownUser, StatusCode::INTERNAL_SERVER_ERROR),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(
                error.status_code(),
                expected_status,
                "wrong status for {:?}",
                error
            );
        }
    }

    #[test]
    fn test_validation_error_carries_field_map() {
        let mut bag = ErrorBag::new();
        bag.add("email", "The email field is required.");
        let err = AuthError::Validation(bag);

        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Validation Error!");
        let details = app_err.details().unwrap();
        assert_eq!(details["email"][0], "The email field is required.");
    }

    #[test]
    fn test_uniform_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::Unauthenticated.to_string(), "Unauthenticated.");
    }
}
