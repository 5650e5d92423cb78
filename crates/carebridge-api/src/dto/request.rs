//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Requested role: "donor" or "orphanage".
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// OTP verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Account email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Six-digit code.
    #[validate(length(equal = 6, message = "Code must be exactly 6 digits"))]
    pub code: String,
}

/// OTP resend request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    /// Account email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Account-level profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// Donor profile creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDonorProfileRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Contact number.
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact_number: String,
    /// Contact email.
    #[validate(email(message = "A valid email is required"))]
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
    /// Organization, for corporate donors.
    pub organization_name: Option<String>,
}

/// Donor profile update (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDonorProfileRequest {
    /// Full name.
    pub full_name: Option<String>,
    /// Contact number.
    pub contact_number: Option<String>,
    /// Contact email.
    pub email: Option<String>,
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

/// Orphanage profile creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrphanageRequest {
    /// Orphanage name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// About text.
    pub description: Option<String>,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// State.
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    /// Postal code.
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
    /// Phone number.
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    /// Contact email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Establishment date.
    pub established_on: Option<NaiveDate>,
    /// Total resident count.
    #[serde(default)]
    pub total_orphans: i32,
    /// Boys count.
    #[serde(default)]
    pub boys_count: i32,
    /// Girls count.
    #[serde(default)]
    pub girls_count: i32,
    /// Enrolled students count.
    #[serde(default)]
    pub students_count: i32,
    /// Government registration number.
    pub registration_no: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Banner image path.
    pub banner_image: Option<String>,
}

/// Orphanage profile update (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrphanageRequest {
    /// Orphanage name.
    pub name: Option<String>,
    /// About text.
    pub description: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Establishment date.
    pub established_on: Option<NaiveDate>,
    /// Total resident count.
    pub total_orphans: Option<i32>,
    /// Boys count.
    pub boys_count: Option<i32>,
    /// Girls count.
    pub girls_count: Option<i32>,
    /// Enrolled students count.
    pub students_count: Option<i32>,
    /// Government registration number.
    pub registration_no: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Banner image path.
    pub banner_image: Option<String>,
}

/// Requirement creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequirementRequest {
    /// Item being requested.
    #[validate(length(min = 1, message = "Item name is required"))]
    pub item_name: String,
    /// Category name; defaults to "others".
    pub category: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Units needed.
    #[validate(range(min = 1, message = "Quantity needed must be positive"))]
    pub quantity_needed: i32,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
}

/// Requirement update (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequirementRequest {
    /// Item being requested.
    pub item_name: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Units needed.
    pub quantity_needed: Option<i32>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
}

/// Donation pledge.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDonationRequest {
    /// Target orphanage.
    pub orphanage_id: Uuid,
    /// Requirement being answered, if any.
    pub requirement_id: Option<Uuid>,
    /// Item name; ignored when a requirement is referenced.
    pub item_name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Units pledged.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
}

/// Donation status transition.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDonationStatusRequest {
    /// Target status: pending, accepted, completed, or cancelled.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    /// Optional delivery proof image path.
    pub proof_image: Option<String>,
}
