use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::services::alert;

/// Services offered on the booking form. Submissions carry the display
/// string verbatim; anything else falls through to `Other` rather than being
/// rejected, since the form is the trust boundary for this field.
#[derive(Debug, Clone, PartialEq, EnumString, Display)]
pub enum ServiceKind {
    #[strum(serialize = "Home & Office Cleaning")]
    HomeOfficeCleaning,
    #[strum(serialize = "Commercial Cleaning")]
    CommercialCleaning,
    #[strum(serialize = "Carpet & Floor Care")]
    CarpetFloorCare,
    #[strum(serialize = "Window Cleaning")]
    WindowCleaning,
    #[strum(serialize = "Sanitization & Disinfection")]
    SanitizationDisinfection,
    #[strum(serialize = "Maintenance Services")]
    MaintenanceServices,
    #[strum(serialize = "Transportation Services")]
    TransportationServices,
    #[strum(serialize = "Multiple Services")]
    MultipleServices,
    #[strum(default, to_string = "{0}")]
    Other(String),
}

/// A booking form submission. Field names are camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    #[garde(length(min = 1, max = 100))]
    pub first_name: String,

    #[garde(length(min = 1, max = 100))]
    pub surname: String,

    #[garde(length(min = 1, max = 20))]
    pub mobile: String,

    #[garde(email)]
    pub email: String,

    #[garde(length(min = 1, max = 300))]
    pub address: String,

    #[garde(length(min = 1, max = 10))]
    pub post_code: String,

    #[garde(length(min = 1, max = 100))]
    pub service: String,

    /// Requested date and time, e.g. "2024-06-01T10:00".
    #[garde(custom(schedule_date_parses))]
    pub schedule_date: String,
}

impl BookingSubmission {
    pub fn service_kind(&self) -> ServiceKind {
        self.service.parse().unwrap_or_else(|_| ServiceKind::Other(self.service.clone()))
    }
}

/// A quote-request form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[garde(length(min = 1, max = 100))]
    pub first_name: String,

    #[garde(length(min = 1, max = 100))]
    pub last_name: String,

    #[garde(email)]
    pub email: String,

    #[garde(length(min = 1, max = 20))]
    pub phone: String,

    #[garde(length(min = 1, max = 100))]
    pub service: String,

    #[garde(length(min = 1, max = 2000))]
    pub message: String,
}

impl QuoteSubmission {
    pub fn service_kind(&self) -> ServiceKind {
        self.service.parse().unwrap_or_else(|_| ServiceKind::Other(self.service.clone()))
    }
}

fn schedule_date_parses(value: &str, _ctx: &()) -> garde::Result {
    alert::parse_schedule_date(value)
        .map(|_| ())
        .map_err(|e| garde::Error::new(format!("not a valid date-time: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_json() -> &'static str {
        r#"{
            "firstName": "John",
            "surname": "Doe",
            "mobile": "07424185232",
            "email": "john@x.com",
            "address": "1 Main St",
            "postCode": "DE21 4EB",
            "service": "Window Cleaning",
            "scheduleDate": "2024-06-01T10:00"
        }"#
    }

    #[test]
    fn booking_deserializes_from_camel_case() {
        let booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        assert_eq!(booking.first_name, "John");
        assert_eq!(booking.post_code, "DE21 4EB");
        assert_eq!(booking.service_kind(), ServiceKind::WindowCleaning);
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn booking_round_trips_in_camel_case() {
        let booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["scheduleDate"], "2024-06-01T10:00");
    }

    #[test]
    fn empty_field_fails_validation() {
        let mut booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        booking.address = String::new();
        assert!(booking.validate().is_err());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let mut booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        booking.email = "not-an-email".to_string();
        let report = booking.validate().unwrap_err();
        assert!(report.to_string().contains("email"));
    }

    #[test]
    fn bad_schedule_date_fails_validation() {
        let mut booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        booking.schedule_date = "next tuesday".to_string();
        assert!(booking.validate().is_err());
    }

    #[test]
    fn unknown_service_maps_to_other() {
        let mut booking: BookingSubmission = serde_json::from_str(booking_json()).unwrap();
        booking.service = "Chimney Sweeping".to_string();
        assert_eq!(
            booking.service_kind(),
            ServiceKind::Other("Chimney Sweeping".to_string())
        );
        assert_eq!(booking.service_kind().to_string(), "Chimney Sweeping");
    }

    #[test]
    fn quote_validates_and_parses() {
        let quote: QuoteSubmission = serde_json::from_str(
            r#"{
                "firstName": "Jane",
                "lastName": "Smith",
                "email": "jane@x.com",
                "phone": "07000000000",
                "service": "Commercial Cleaning",
                "message": "Weekly office clean for 2 floors"
            }"#,
        )
        .unwrap();
        assert!(quote.validate().is_ok());
        assert_eq!(quote.service_kind(), ServiceKind::CommercialCleaning);
    }
}
