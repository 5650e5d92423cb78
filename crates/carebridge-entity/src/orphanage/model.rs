//! Orphanage profile model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Role-specific profile for an orphanage account (one per account).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrphanageProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Owning account.
    pub account_id: Uuid,
    /// Organization name.
    pub name: String,
    /// Free-form description shown in the public directory.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Contact email.
    pub email: String,
    /// Date the organization was established.
    pub established_on: Option<NaiveDate>,
    /// Total number of children housed.
    pub total_orphans: i32,
    /// Number of boys.
    pub boys_count: i32,
    /// Number of girls.
    pub girls_count: i32,
    /// Number of school-going children.
    pub students_count: i32,
    /// Government registration number.
    pub registration_no: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Set by administrators after manual review; never client-writable.
    pub verified: bool,
    /// Stored path of the banner image, if uploaded.
    pub banner_image: Option<String>,
}

/// Summary row for the public orphanage directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrphanageSummary {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Organization name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Total number of children housed.
    pub total_orphans: i32,
    /// Whether the profile has been verified by an administrator.
    pub verified: bool,
    /// Stored path of the banner image, if uploaded.
    pub banner_image: Option<String>,
}

/// Data required to create an orphanage profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrphanageProfile {
    /// Owning account.
    pub account_id: Uuid,
    /// Organization name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Contact email.
    pub email: String,
    /// Establishment date.
    pub established_on: Option<NaiveDate>,
    /// Total number of children housed.
    pub total_orphans: i32,
    /// Number of boys.
    pub boys_count: i32,
    /// Number of girls.
    pub girls_count: i32,
    /// Number of school-going children.
    pub students_count: i32,
    /// Government registration number.
    pub registration_no: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Banner image path.
    pub banner_image: Option<String>,
}

/// Data for updating an existing orphanage profile (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrphanageProfile {
    /// New organization name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state.
    pub state: Option<String>,
    /// New postal code.
    pub pincode: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New establishment date.
    pub established_on: Option<NaiveDate>,
    /// New total children count.
    pub total_orphans: Option<i32>,
    /// New boys count.
    pub boys_count: Option<i32>,
    /// New girls count.
    pub girls_count: Option<i32>,
    /// New students count.
    pub students_count: Option<i32>,
    /// New registration number.
    pub registration_no: Option<String>,
    /// New website URL.
    pub website: Option<String>,
    /// New banner image path.
    pub banner_image: Option<String>,
}
