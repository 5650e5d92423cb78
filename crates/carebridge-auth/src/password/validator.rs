//! Password policy enforcement for new passwords.

use carebridge_core::config::AuthConfig;
use carebridge_core::error::AppError;

/// Validates password strength against configured policies.
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

    /// Validates a password against the configured policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if password.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password cannot be entirely numeric",
            ));
        }

        Ok(())
    }
}
