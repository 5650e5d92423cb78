//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles an account can hold.
///
/// Donors pledge donations, orphanages post requirements and receive them.
/// Admin accounts are created out of band and bypass profile requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Individual donor.
    Donor,
    /// Orphanage organization.
    Orphanage,
    /// System administrator.
    Admin,
}

impl AccountRole {
    /// Roles a caller may self-register with.
    pub fn is_registrable(&self) -> bool {
        matches!(self, Self::Donor | Self::Orphanage)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Orphanage => "orphanage",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = carebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "orphanage" => Ok(Self::Orphanage),
            "admin" => Ok(Self::Admin),
            _ => Err(carebridge_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: donor, orphanage, admin"
            ))),
        }
    }
}
