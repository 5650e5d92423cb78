//! # carebridge-database
//!
//! PostgreSQL connection management, embedded migrations, and one
//! repository per entity.

pub mod connection;
pub mod repositories;
