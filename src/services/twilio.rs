use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::TwilioCredentials;
use crate::services::provider::{ProviderError, ProviderMessageId, SmsProvider};

/// Twilio Programmable Messaging client: HTTP Basic auth with the account
/// SID and auth token, URL-form-encoded body.
pub struct TwilioClient {
    http: Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    base_url: String,
}

#[derive(Deserialize)]
struct MessageResource {
    #[serde(default)]
    sid: Option<String>,
}

impl TwilioClient {
    pub fn new(creds: TwilioCredentials, base_url: String) -> Self {
        Self {
            http: Client::new(),
            account_sid: creds.account_sid,
            auth_token: creds.auth_token,
            from_number: creds.phone_number,
            base_url,
        }
    }

    fn parse_success(body: &str) -> Result<ProviderMessageId, ProviderError> {
        let resource: MessageResource = serde_json::from_str(body)
            .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;
        match resource.sid {
            Some(sid) if !sid.is_empty() => Ok(ProviderMessageId::Sid(sid)),
            _ => Err(ProviderError::Malformed("response missing sid".to_string())),
        }
    }
}

#[async_trait]
impl SmsProvider for TwilioClient {
    fn name(&self) -> &'static str {
        "twilio"
    }

    async fn send(
        &self,
        message: &str,
        destination: &str,
    ) -> Result<ProviderMessageId, ProviderError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", destination),
                ("From", self.from_number.as_str()),
                ("Body", message),
            ])
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
    fn success_body_yields_sid() {
        let id = TwilioClient::parse_success(r#"{"sid":"SM123","status":"queued"}"#).unwrap();
        assert_eq!(id, ProviderMessageId::Sid("SM123".to_string()));
    }

    #[test]
    fn missing_sid_is_malformed() {
        assert!(matches!(
            TwilioClient::parse_success(r#"{"status":"queued"}"#),
            Err(ProviderError::Malformed(_))
        ));
        assert!(matches!(
            TwilioClient::parse_success("not json"),
            Err(ProviderError::Malformed(_))
        ));
    }
}
