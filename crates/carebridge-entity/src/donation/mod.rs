//! Donation entity and workflow status.

pub mod model;
pub mod status;

pub use model::{CreateDonation, Donation};
pub use status::DonationStatus;
