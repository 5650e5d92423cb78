//! One-time verification code configuration.

use serde::{Deserialize, Serialize};

/// OTP issuance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// How long an issued code stays valid, in minutes.
    #[serde(default = "default_validity_minutes")]
    pub validity_minutes: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            validity_minutes: default_validity_minutes(),
        }
    }
}

fn default_validity_minutes() -> u64 {
    10
}
