//! Donor profile model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Role-specific profile for a donor account (one per account).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonorProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Owning account.
    pub account_id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email (may differ from the login email).
    pub email: String,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// Occupation.
    pub occupation: Option<String>,
    /// Organization the donor represents, if any.
    pub organization_name: Option<String>,
    /// Set by administrators after manual review; never client-writable.
    pub is_verified: bool,
}

/// Data required to create a donor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDonorProfile {
    /// Owning account.
    pub account_id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// Occupation.
    pub occupation: Option<String>,
    /// Organization name.
    pub organization_name: Option<String>,
}

/// Data for updating an existing donor profile (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDonorProfile {
    /// New full name.
    pub full_name: Option<String>,
    /// New contact number.
    pub contact_number: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state.
    pub state: Option<String>,
    /// New postal code.
    pub pincode: Option<String>,
    /// New occupation.
    pub occupation: Option<String>,
    /// New organization name.
    pub organization_name: Option<String>,
}
