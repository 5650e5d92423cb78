//! Custom Axum extractors.

mod auth;

pub use auth::AuthUser;
