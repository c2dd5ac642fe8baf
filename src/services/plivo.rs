use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::PlivoCredentials;
use crate::services::provider::{ProviderError, ProviderMessageId, SmsProvider};

/// Plivo Message API client: HTTP Basic auth with the auth ID and token,
/// JSON body. The message UUID comes back as a one-element array.
pub struct PlivoClient {
    http: Client,
    auth_id: String,
    auth_token: String,
    from_number: String,
    base_url: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message_uuid: Vec<String>,
}

impl PlivoClient {
    pub fn new(creds: PlivoCredentials, base_url: String) -> Self {
        Self {
            http: Client::new(),
            auth_id: creds.auth_id,
            auth_token: creds.auth_token,
            from_number: creds.phone_number,
            base_url,
        }
    }

    fn parse_success(body: &str) -> Result<ProviderMessageId, ProviderError> {
        let response: MessageResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;
        match response.message_uuid.into_iter().next() {
            Some(uuid) if !uuid.is_empty() => Ok(ProviderMessageId::Uuid(uuid)),
            _ => Err(ProviderError::Malformed(
                "response missing message_uuid".to_string(),
            )),
        }
    }
}

#[async_trait]
impl SmsProvider for PlivoClient {
    fn name(&self) -> &'static str {
        "plivo"
    }

    async fn send(
        &self,
        message: &str,
        destination: &str,
    ) -> Result<ProviderMessageId, ProviderError> {
        let url = format!("{}/v1/Account/{}/Message/", self.base_url, self.auth_id);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.auth_id, Some(&self.auth_token))
            .json(&json!({
                "src": self.from_number,
                "dst": destination,
                "text": message,
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_success(&body)
    }
}
