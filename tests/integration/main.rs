//! End-to-end tests against the full router.

mod helpers;

mod auth_test;
mod donation_test;
mod profile_test;
mod requirement_test;
