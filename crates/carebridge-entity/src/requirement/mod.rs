//! Requirement entity — items an orphanage is requesting.

pub mod category;
pub mod model;

pub use category::RequirementCategory;
pub use model::{CreateRequirement, Requirement, UpdateRequirement};
