//! Donor profile self-service.

mod service;

pub use service::DonorProfileService;
