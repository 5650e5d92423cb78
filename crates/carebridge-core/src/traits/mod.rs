//! Core traits defined in `carebridge-core` and implemented by other crates.

pub mod mailer;

pub use mailer::Mailer;
