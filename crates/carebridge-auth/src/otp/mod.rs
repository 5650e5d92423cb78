//! One-time verification code generation.

mod generator;

pub use generator::OtpGenerator;
