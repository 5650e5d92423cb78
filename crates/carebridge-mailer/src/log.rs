//! Log-only mail transport for development and tests.

use async_trait::async_trait;
use tracing::info;

use carebridge_core::config::MailerConfig;
use carebridge_core::result::AppResult;
use carebridge_core::traits::Mailer;

/// Writes every message to the application log instead of sending it.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    /// Create a new log transport.
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            from: format!("{} <{}>", config.from_name, config.from_address),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    fn transport(&self) -> &str {
        "log"
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        info!(from = %self.from, %to, %subject, %body, "Outbound mail (log transport)");
        Ok(())
    }
}
