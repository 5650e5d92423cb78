//! Requirement model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::RequirementCategory;

/// An item an orphanage is requesting, with fulfillment tracking fields.
///
/// `quantity_received` and `is_fulfilled` are read-only from the client's
/// perspective. No workflow currently advances them when a donation
/// completes; the columns exist for a future linkage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Requirement {
    /// Unique requirement identifier.
    pub id: Uuid,
    /// The orphanage profile this requirement belongs to.
    pub orphanage_id: Uuid,
    /// Requested item name.
    pub item_name: String,
    /// Category.
    pub category: RequirementCategory,
    /// Free-form description.
    pub description: Option<String>,
    /// Quantity the orphanage needs.
    pub quantity_needed: i32,
    /// Quantity received so far (never client-writable).
    pub quantity_received: i32,
    /// When the requirement was posted.
    pub posted_at: DateTime<Utc>,
    /// Optional deadline for the need.
    pub deadline: Option<NaiveDate>,
    /// Whether the need has been fully met (never client-writable).
    pub is_fulfilled: bool,
}

/// Data required to post a new requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequirement {
    /// The posting orphanage profile.
    pub orphanage_id: Uuid,
    /// Requested item name.
    pub item_name: String,
    /// Category.
    pub category: RequirementCategory,
    /// Description.
    pub description: Option<String>,
    /// Quantity needed.
    pub quantity_needed: i32,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
}

/// Data for updating a posted requirement (owner only; all fields optional).
///
/// Deliberately excludes `quantity_received` and `is_fulfilled`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequirement {
    /// New item name.
    pub item_name: Option<String>,
    /// New category.
    pub category: Option<RequirementCategory>,
    /// New description.
    pub description: Option<String>,
    /// New quantity needed.
    pub quantity_needed: Option<i32>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
}
