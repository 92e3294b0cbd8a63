//! Account credentials: password hashing and registration rules.

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use laundry_shared::AppError;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reasons a registration request is rejected before touching storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Email is blank.
    #[error("Email is required")]
    MissingEmail,

    /// Email has no `@` or an empty local/domain part.
    #[error("Email address is not valid")]
    InvalidEmail,

    /// Full name is blank.
    #[error("Full name is required")]
    MissingName,

    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Lower-cases and trims an email so lookups are case-insensitive.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks registration fields.
///
/// `email` is expected to be normalized already.
pub fn validate_registration(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), CredentialError> {
    if email.is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(CredentialError::InvalidEmail),
    }
    if full_name.trim().is_empty() {
        return Err(CredentialError::MissingName);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}
