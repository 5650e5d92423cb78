//! Registration, OTP verification, and token issuance.

mod service;

pub use service::{AuthService, RegisterRequest};
