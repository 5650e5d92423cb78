//! Six-digit verification code generation.

use chrono::{DateTime, Duration, Utc};
use rand::RngExt;

use carebridge_core::config::OtpConfig;

/// Generates zero-padded six-digit verification codes with a configured
/// validity window.
#[derive(Debug, Clone)]
pub struct OtpGenerator {
    /// Validity window in minutes.
    validity_minutes: i64,
}

impl OtpGenerator {
    /// Creates a new generator from OTP configuration.
    pub fn new(config: &OtpConfig) -> Self {
        Self {
            validity_minutes: config.validity_minutes as i64,
        }
    }

    /// Produces a fresh code. Leading zeros are preserved, so the code is
    /// always exactly six characters.
    pub fn generate_code(&self) -> String {
        let n: u32 = rand::rng().random_range(0..=999_999);
        format!("{n:06}")
    }

    /// Expiration timestamp for a code issued now.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + Duration::minutes(self.validity_minutes)
    }
}
