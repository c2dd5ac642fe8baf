use serde::Deserialize;

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

// Production API hosts. Overridable so tests can point the clients at a
// local stub server.
fn default_twilio_base_url() -> String {
    "https://api.twilio.com".to_string()
}

fn default_messagebird_base_url() -> String {
    "https://rest.messagebird.com".to_string()
}

fn default_plivo_base_url() -> String {
    "https://api.plivo.com".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Twilio account SID (basic-auth username)
    pub twilio_account_sid: Option<String>,

    /// Twilio auth token (basic-auth password)
    pub twilio_auth_token: Option<String>,

    /// Twilio sender phone number, international format
    pub twilio_phone_number: Option<String>,

    #[serde(default = "default_twilio_base_url")]
    pub twilio_base_url: String,

    /// MessageBird live API key
    pub messagebird_api_key: Option<String>,

    #[serde(default = "default_messagebird_base_url")]
    pub messagebird_base_url: String,

    /// Plivo auth ID (basic-auth username)
    pub plivo_auth_id: Option<String>,

    /// Plivo auth token (basic-auth password)
    pub plivo_auth_token: Option<String>,

    /// Plivo sender phone number, international format
    pub plivo_phone_number: Option<String>,

    #[serde(default = "default_plivo_base_url")]
    pub plivo_base_url: String,
}

/// A complete Twilio credential group. Only constructed when all three
/// variables are present.
#[derive(Debug, Clone)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
}

/// A complete Plivo credential group.
#[derive(Debug, Clone)]
pub struct PlivoCredentials {
    pub auth_id: String,
    pub auth_token: String,
    pub phone_number: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Twilio credentials, if the full group is configured. A partial group
    /// counts as unconfigured.
    pub fn twilio(&self) -> Option<TwilioCredentials> {
        Some(TwilioCredentials {
            account_sid: self.twilio_account_sid.clone()?,
            auth_token: self.twilio_auth_token.clone()?,
            phone_number: self.twilio_phone_number.clone()?,
        })
    }

    pub fn messagebird(&self) -> Option<String> {
        self.messagebird_api_key.clone()
    }

    pub fn plivo(&self) -> Option<PlivoCredentials> {
        Some(PlivoCredentials {
            auth_id: self.plivo_auth_id.clone()?,
            auth_token: self.plivo_auth_token.clone()?,
            phone_number: self.plivo_phone_number.clone()?,
        })
    }
}
