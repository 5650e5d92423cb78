//! Outbound mail gateway configuration.

use serde::{Deserialize, Serialize};

/// Mail gateway settings.
///
/// `provider` selects the transport: `"http"` posts to a mail-API relay,
/// `"log"` writes messages to the application log (development/tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Transport provider: `"http"` or `"log"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Mail API endpoint URL (http provider only).
    #[serde(default)]
    pub api_url: String,
    /// Bearer token for the mail API (http provider only).
    #[serde(default)]
    pub api_token: String,
    /// Sender address placed on outgoing messages.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Request timeout in seconds for the mail API.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: String::new(),
            api_token: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_from_address() -> String {
    "no-reply@carebridge.local".to_string()
}

fn default_from_name() -> String {
    "CareBridge".to_string()
}

fn default_timeout() -> u64 {
    10
}
