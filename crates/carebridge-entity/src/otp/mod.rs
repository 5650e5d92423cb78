//! One-time verification code entity.

pub mod model;

pub use model::OtpCode;
