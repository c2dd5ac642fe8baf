use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::services::alert;
use crate::services::provider::{ProviderError, ProviderMessageId, SmsProvider};

/// MessageBird REST client: single API key in an `Authorization: AccessKey`
/// header, JSON body. Creation answers HTTP 201.
pub struct MessageBirdClient {
    http: Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct MessageObject {
    #[serde(default)]
    id: Option<String>,
}

impl MessageBirdClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    fn parse_success(body: &str) -> Result<ProviderMessageId, ProviderError> {
        let message: MessageObject = serde_json::from_str(body)
            .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;
        match message.id {
            Some(id) if !id.is_empty() => Ok(ProviderMessageId::Id(id)),
            _ => Err(ProviderError::Malformed("response missing id".to_string())),
        }
    }
}

#[async_trait]
impl SmsProvider for MessageBirdClient {
    fn name(&self) -> &'static str {
        "messagebird"
    }

    async fn send(
        &self,
        message: &str,
        destination: &str,
    ) -> Result<ProviderMessageId, ProviderError> {
        let url = format!("{}/messages", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("AccessKey {}", self.api_key))
            .json(&json!({
                "recipients": [destination],
                "originator": alert::SENDER_NAME,
                "body": message,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_id() {
        let id =
            MessageBirdClient::parse_success(r#"{"id":"abc123","href":"/messages/abc123"}"#)
                .unwrap();
        assert_eq!(id, ProviderMessageId::Id("abc123".to_string()));
    }

    #[test]
    fn empty_id_is_malformed() {
        assert!(matches!(
            MessageBirdClient::parse_success(r#"{"id":""}"#),
            Err(ProviderError::Malformed(_))
        ));
    }
}
