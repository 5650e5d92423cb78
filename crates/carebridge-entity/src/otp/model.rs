//! One-time verification code model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A one-time verification code bound to an account.
///
/// Codes are never physically deleted: they are retired by the `used` flag
/// or by passing their expiry. Expiry is evaluated lazily at verification
/// time; there is no background sweep.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OtpCode {
    /// Unique row identifier.
    pub id: Uuid,
    /// The account this code belongs to.
    pub account_id: Uuid,
    /// Six-digit zero-padded numeric code.
    pub code: String,
    /// When the code was issued.
    pub created_at: DateTime<Utc>,
    /// When the code stops being valid.
    pub expires_at: DateTime<Utc>,
    /// Whether the code has already been consumed.
    pub used: bool,
}

impl OtpCode {
    /// Whether the code is past its expiry at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the code is past its expiry right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
