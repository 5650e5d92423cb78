//! One-time verification code repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::otp::OtpCode;

/// Repository for OTP issuance and consumption.
#[derive(Debug, Clone)]
pub struct OtpRepository {
    pool: PgPool,
}

impl OtpRepository {
    /// Create a new OTP repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly issued code.
    pub async fn create(
        &self,
        account_id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<OtpCode> {
        sqlx::query_as::<_, OtpCode>(
            "INSERT INTO otp_codes (account_id, code, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(account_id)
        .bind(code)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create OTP code", e))
    }

    /// Find the most recently issued unused code matching the given value.
    ///
    /// Issuing a new code never invalidates earlier ones; the newest
    /// matching unused row wins.
    pub async fn find_latest_matching(
        &self,
        account_id: Uuid,
        code: &str,
    ) -> AppResult<Option<OtpCode>> {
        sqlx::query_as::<_, OtpCode>(
            "SELECT * FROM otp_codes \
             WHERE account_id = $1 AND code = $2 AND used = FALSE \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(account_id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up OTP code", e))
    }

    /// Consume a code, returning whether this call actually flipped it.
    ///
    /// The `used = FALSE` predicate makes consumption race-safe: of two
    /// concurrent verifiers, at most one sees a row to update.
    pub async fn mark_used(&self, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE otp_codes SET used = TRUE WHERE id = $1 AND used = FALSE")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark OTP used", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
