//! Donor profile entity.

pub mod model;

pub use model::{CreateDonorProfile, DonorProfile, UpdateDonorProfile};
