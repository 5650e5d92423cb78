//! Orphanage profile management and the public directory.

mod service;

pub use service::OrphanageService;
