//! Donation model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::DonationStatus;

/// A donor's pledge of an item toward an orphanage, optionally against a
/// posted requirement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    /// Unique donation identifier.
    pub id: Uuid,
    /// The pledging donor profile.
    pub donor_id: Uuid,
    /// The receiving orphanage profile.
    pub orphanage_id: Uuid,
    /// The requirement this donation is pledged against, if any.
    pub requirement_id: Option<Uuid>,
    /// Donated item name (copied from the requirement when one is referenced).
    pub item_name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Pledged quantity.
    pub quantity: i32,
    /// Workflow status; only the owning orphanage may change it.
    pub status: DonationStatus,
    /// When the donation was created.
    pub created_at: DateTime<Utc>,
    /// Stored path of a proof-of-delivery image, if uploaded.
    pub proof_image: Option<String>,
}

/// Data required to create a new donation (status always starts pending).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDonation {
    /// The pledging donor profile.
    pub donor_id: Uuid,
    /// The receiving orphanage profile.
    pub orphanage_id: Uuid,
    /// Optional requirement reference.
    pub requirement_id: Option<Uuid>,
    /// Item name (already resolved against the requirement, if any).
    pub item_name: String,
    /// Description.
    pub description: Option<String>,
    /// Pledged quantity.
    pub quantity: i32,
}
