//! Account entity.

pub mod model;
pub mod role;

pub use model::{Account, CreateAccount, UpdateAccount};
pub use role::AccountRole;
