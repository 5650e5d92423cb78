//! # carebridge-auth
//!
//! Credential handling for the CareBridge platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `otp` — One-time verification code generation

pub mod jwt;
pub mod otp;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use otp::OtpGenerator;
pub use password::{PasswordHasher, PasswordValidator};
