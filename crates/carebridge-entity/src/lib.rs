//! # carebridge-entity
//!
//! Domain entity models for CareBridge: accounts, one-time verification
//! codes, donor and orphanage profiles, requirements, and donations.

pub mod account;
pub mod donation;
pub mod donor;
pub mod orphanage;
pub mod otp;
pub mod requirement;
