//! Requirement postings and public need listings.

mod service;

pub use service::RequirementService;
