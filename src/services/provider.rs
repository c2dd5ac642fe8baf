use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::services::{messagebird::MessageBirdClient, plivo::PlivoClient, twilio::TwilioClient};

/// Provider-assigned identifier for a delivered message. The variant records
/// which response field the provider used, which in turn decides the field
/// name in our own response.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderMessageId {
    /// Twilio `sid`
    Sid(String),
    /// MessageBird `id`
    Id(String),
    /// Plivo `message_uuid[0]`
    Uuid(String),
}

impl ProviderMessageId {
    pub fn value(&self) -> &str {
        match self {
            Self::Sid(v) | Self::Id(v) | Self::Uuid(v) => v,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network-level failure reaching the provider (DNS, TLS, timeouts).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status. The raw body is preserved so
    /// the caller can surface the provider's own error text.
    #[error("provider rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// 2xx response whose body did not carry a usable message identifier.
    #[error("unexpected provider response: {0}")]
    Malformed(String),
}

/// One SMS delivery backend. Implementations differ only in authentication
/// scheme, body encoding, and where the message identifier lives in the
/// response.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Deliver `message` to `destination` (E.164). One attempt, no retry.
    async fn send(
        &self,
        message: &str,
        destination: &str,
    ) -> Result<ProviderMessageId, ProviderError>;
}

/// Pick the delivery backend from whichever credential group is complete.
/// Checked in a fixed order (Twilio, MessageBird, Plivo); `None` means the
/// dispatcher runs in the degraded log-only mode.
pub fn select_provider(config: &AppConfig) -> Option<Arc<dyn SmsProvider>> {
    if let Some(creds) = config.twilio() {
        return Some(Arc::new(TwilioClient::new(creds, config.twilio_base_url.clone())));
    }
    if let Some(api_key) = config.messagebird() {
        return Some(Arc::new(MessageBirdClient::new(
            api_key,
            config.messagebird_base_url.clone(),
        )));
    }
    if let Some(creds) = config.plivo() {
        return Some(Arc::new(PlivoClient::new(creds, config.plivo_base_url.clone())));
    }
    None
}
