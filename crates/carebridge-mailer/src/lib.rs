//! # carebridge-mailer
//!
//! Outbound mail transport implementations for CareBridge. Supports an
//! HTTP mail-API relay and a log-only transport for development and tests.

pub mod http;
pub mod log;

use std::sync::Arc;

use carebridge_core::config::MailerConfig;
use carebridge_core::error::AppError;
use carebridge_core::result::AppResult;
use carebridge_core::traits::Mailer;

pub use http::HttpApiMailer;
pub use log::LogMailer;

/// Build the configured mail transport.
pub fn create_mailer(config: &MailerConfig) -> AppResult<Arc<dyn Mailer>> {
    match config.provider.as_str() {
        "http" => Ok(Arc::new(HttpApiMailer::new(config)?)),
        "log" => Ok(Arc::new(LogMailer::new(config))),
        other => Err(AppError::configuration(format!(
            "Unknown mail provider: {other}"
        ))),
    }
}
