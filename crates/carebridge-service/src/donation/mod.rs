//! Donation workflow engine.

mod service;

pub use service::{CreateDonationRequest, DonationService};
