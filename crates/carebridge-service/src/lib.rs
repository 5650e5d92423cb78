//! # carebridge-service
//!
//! Business logic service layer for CareBridge. Each service orchestrates
//! repositories, credential handling, and the mail gateway to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod donation;
pub mod donor;
pub mod notify;
pub mod orphanage;
pub mod requirement;

pub use auth::AuthService;
pub use context::RequestContext;
pub use donation::DonationService;
pub use donor::DonorProfileService;
pub use notify::NotifyService;
pub use orphanage::OrphanageService;
pub use requirement::RequirementService;
