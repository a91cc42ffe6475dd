//! User Name Value Object
//!
//! The display name supplied at registration. Unlike a login handle it does
//! not need to be unique; the email is the login key.
//!
//! ## 不変条件
//! - NFKC 正規化後、前後の空白を除去
//! - 空でないこと
//! - 250 文字以内
//! - 制御文字を含まないこと

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 250;

/// User display name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// The input is NFKC-normalized and trimmed before validation.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let normalized: String = name.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
