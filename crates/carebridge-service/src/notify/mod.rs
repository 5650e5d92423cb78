//! Outbound notification composition and best-effort dispatch.

mod messages;
mod service;

pub use service::NotifyService;
