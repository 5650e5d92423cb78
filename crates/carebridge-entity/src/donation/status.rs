//! Donation workflow status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a donation.
///
/// All transitions are caller-driven and every target state is reachable
/// from every source state. Completed and cancelled are not enforced as
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Awaiting a decision from the orphanage.
    Pending,
    /// Accepted by the orphanage.
    Accepted,
    /// Delivered and acknowledged.
    Completed,
    /// Withdrawn or declined.
    Cancelled,
}

impl DonationStatus {
    /// Whether moving from `prev` to `self` is the edge into Accepted.
    ///
    /// The acceptance notification is edge-triggered: it fires only when
    /// the stored status was not already Accepted, so a repeated update to
    /// Accepted dispatches nothing.
    pub fn is_acceptance_edge(self, prev: DonationStatus) -> bool {
        self == Self::Accepted && prev != Self::Accepted
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for DonationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = carebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(carebridge_core::AppError::validation(format!(
                "Invalid donation status: '{s}'. Expected one of: pending, accepted, completed, cancelled"
            ))),
        }
    }
}
