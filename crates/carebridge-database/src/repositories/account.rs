//! Account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_entity::account::model::{Account, CreateAccount, UpdateAccount};

/// Repository for account CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// Find an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    /// Create a new account (inactive and unverified).
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (email, password_hash, role) \
             VALUES (LOWER($1), $2, $3) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::conflict("Email already registered".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    /// Update an account's own profile fields.
    pub async fn update(&self, data: &UpdateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET first_name = COALESCE($2, first_name), \
                                 last_name = COALESCE($3, last_name), \
                                 phone = COALESCE($4, phone), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update account", e))?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", data.id)))
    }

    /// Mark an account verified and active.
    ///
    /// Called only from the OTP verification path; this is the single
    /// place an account is activated.
    pub async fn activate(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE accounts SET is_verified = TRUE, is_active = TRUE, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to activate account", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {id} not found")));
        }
        Ok(())
    }
}
