//! Signup policy for usernames and passwords.

use retrolog_core::config::AuthConfig;
use retrolog_core::error::AppError;

/// Username length bounds, in characters.
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;

/// Checks new credentials against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password for signup.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Validates a username for signup.
    ///
    /// Usernames are 3 to 50 characters of ASCII letters, digits, `_`, `.`
    /// or `-`. They are compared exactly, so no case folding happens here.
    pub fn validate_username(&self, username: &str) -> Result<(), AppError> {
        let len = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
            return Err(AppError::validation(format!(
                "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            )));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(AppError::validation(
                "Username may only contain letters, digits, '_', '.' and '-'",
            ));
        }
        Ok(())
    }
}
