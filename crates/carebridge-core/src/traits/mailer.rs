//! Notification gateway trait for outbound email.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for outbound mail transports.
///
/// The trait is defined here in `carebridge-core` and implemented in
/// `carebridge-mailer` (HTTP mail-API relay, log-only transport). Callers
/// that treat delivery as best-effort must catch and log the error
/// themselves; implementations report transport failures normally.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Return the transport name (e.g., "http", "log").
    fn transport(&self) -> &str;

    /// Send a plain-text message to a single recipient.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}
