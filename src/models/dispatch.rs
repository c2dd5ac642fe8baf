use serde::Serialize;

use crate::models::submission::{BookingSubmission, QuoteSubmission};
use crate::services::provider::ProviderMessageId;

/// Successful dispatch outcome returned to the form client. The provider
/// message identifier keeps its provider-specific field name, so which key
/// appears depends on the configured backend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_sid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_uuid: Option<String>,

    /// Echo of the submission, only present in the degraded
    /// provider-unconfigured path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_data: Option<BookingSubmission>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_data: Option<QuoteSubmission>,
}

impl DispatchResponse {
    fn delivered(message: &str, id: ProviderMessageId) -> Self {
        let mut response = Self {
            success: true,
            message: message.to_string(),
            message_sid: None,
            message_id: None,
            message_uuid: None,
            booking_data: None,
            quote_data: None,
        };
        match id {
            ProviderMessageId::Sid(sid) => response.message_sid = Some(sid),
            ProviderMessageId::Id(id) => response.message_id = Some(id),
            ProviderMessageId::Uuid(uuid) => response.message_uuid = Some(uuid),
        }
        response
    }

    pub fn booking_sent(id: ProviderMessageId) -> Self {
        Self::delivered("Booking confirmed and SMS sent", id)
    }

    pub fn quote_sent(id: ProviderMessageId) -> Self {
        Self::delivered("Quote request confirmed and SMS sent", id)
    }

    pub fn booking_degraded(booking: BookingSubmission) -> Self {
        Self {
            success: true,
            message: "Booking received (SMS not configured)".to_string(),
            message_sid: None,
            message_id: None,
            message_uuid: None,
            booking_data: Some(booking),
            quote_data: None,
        }
    }

    pub fn quote_degraded(quote: QuoteSubmission) -> Self {
        Self {
            success: true,
            message: "Quote request received (SMS not configured)".to_string(),
            message_sid: None,
            message_id: None,
            message_uuid: None,
            booking_data: None,
            quote_data: Some(quote),
        }
    }
}

/// Uniform failure body for the 500 path. `error` is a generic per-endpoint
/// summary; `details` carries the underlying error text.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: &str, details: String) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sid_serializes_under_message_sid() {
        let response =
            DispatchResponse::booking_sent(ProviderMessageId::Sid("SM123".to_string()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["messageSid"], "SM123");
        assert!(value.get("messageId").is_none());
        assert!(value.get("messageUuid").is_none());
    }

    #[test]
    fn id_serializes_under_message_id() {
        let response = DispatchResponse::quote_sent(ProviderMessageId::Id("abc123".to_string()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["messageId"], "abc123");
        assert!(value.get("messageSid").is_none());
    }

    #[test]
    fn degraded_booking_echoes_submission() {
        let booking: BookingSubmission = serde_json::from_str(
            r#"{"firstName":"John","surname":"Doe","mobile":"07424185232",
                "email":"john@x.com","address":"1 Main St","postCode":"DE21 4EB",
                "service":"Window Cleaning","scheduleDate":"2024-06-01T10:00"}"#,
        )
        .unwrap();
        let response = DispatchResponse::booking_degraded(booking);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["message"].as_str().unwrap().contains("not configured"));
        assert_eq!(value["bookingData"]["firstName"], "John");
    }
}
