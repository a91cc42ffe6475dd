//! User Password Value Object
//!
//! Domain value object for user passwords. Delegates the cryptographic work
//! to `platform::password` (Argon2id, zeroization, constant-time compare).

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules (NIST SP 800-63B)
    /// - Minimum 8 characters
    /// - Maximum 128 characters
    /// - No control characters
    /// - Unicode NFKC normalized
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("Password must be at least {} characters", min))
            }
            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("Password must be at most {} characters", max))
            }
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Hashed user password as persisted in the credential store
///
/// Holds the PHC string produced by Argon2id. The original plaintext is
/// unrecoverable.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed.as_phc_string().to_string()))
    }

    /// Create from database value
    pub fn from_db(hash: String) -> Self {
        Self(hash)
    }

    /// Get the PHC string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a raw password against this hash
    ///
    /// Returns false on any mismatch or malformed digest; never fails.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        match HashedPassword::from_phc_string(&self.0) {
            Ok(hashed) => hashed.verify(raw.inner(), pepper),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}
