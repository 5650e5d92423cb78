//! Repository implementations, one per entity.

pub mod account;
pub mod donation;
pub mod donor;
pub mod orphanage;
pub mod otp;
pub mod requirement;
