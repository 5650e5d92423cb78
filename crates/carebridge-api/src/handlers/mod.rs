//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod donation;
pub mod donor;
pub mod health;
pub mod orphanage;
pub mod requirement;
