//! # carebridge-core
//!
//! Core crate for CareBridge. Contains the unified error system,
//! configuration schemas, and the notification gateway trait.
//!
//! This crate has **no** internal dependencies on other CareBridge crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
