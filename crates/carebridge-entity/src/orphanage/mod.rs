//! Orphanage profile entity.

pub mod model;

pub use model::{CreateOrphanageProfile, OrphanageProfile, OrphanageSummary, UpdateOrphanageProfile};
