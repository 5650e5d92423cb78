//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A registered account in the CareBridge system.
///
/// Accounts are created inactive and unverified; the only path that flips
/// both flags is a successful OTP verification.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Email address (unique, stored lowercase).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// First name (filled in after registration).
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Account role.
    pub role: AccountRole,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the email address has been verified via OTP.
    pub is_verified: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if the account can log in right now.
    pub fn can_login(&self) -> bool {
        self.is_active && self.is_verified
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Email address (will be lowercased before storage).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: AccountRole,
}

/// Data for updating an account's own profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// The account ID to update.
    pub id: Uuid,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}
