//! HTTP mail-API relay transport.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use carebridge_core::config::MailerConfig;
use carebridge_core::error::{AppError, ErrorKind};
use carebridge_core::result::AppResult;
use carebridge_core::traits::Mailer;

/// Sends mail by posting JSON to an HTTP mail API with bearer auth.
#[derive(Debug, Clone)]
pub struct HttpApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
    from: String,
}

/// Request body posted to the mail API.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

impl HttpApiMailer {
    /// Create a new HTTP transport from mailer configuration.
    pub fn new(config: &MailerConfig) -> AppResult<Self> {
        if config.api_url.is_empty() {
            return Err(AppError::configuration(
                "mailer.api_url is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build mail client", e)
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            from: format!("{} <{}>", config.from_name, config.from_address),
        })
    }
}

#[async_trait]
impl Mailer for HttpApiMailer {
    fn transport(&self) -> &str {
        "http"
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let request = SendRequest {
            from: &self.from,
            to,
            subject,
            body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Mail API request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Mail API returned {status}: {detail}"
            )));
        }

        debug!(%to, %subject, "Mail accepted by API");
        Ok(())
    }
}
