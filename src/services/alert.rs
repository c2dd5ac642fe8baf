use chrono::{DateTime, NaiveDateTime};

use crate::models::submission::{BookingSubmission, QuoteSubmission};

/// Business phone number that receives alert SMS, as dialled locally.
/// Hardcoded deliberately, same as the destination in the deployed site.
pub const BUSINESS_PHONE: &str = "07424185232";

/// Alphanumeric sender ID for providers that support one.
pub const SENDER_NAME: &str = "AplusSvcs";

/// Destination in international form: UK local `07...` becomes `+447...`.
pub fn destination() -> String {
    match BUSINESS_PHONE.strip_prefix('0') {
        Some(rest) => format!("+44{rest}"),
        None => BUSINESS_PHONE.to_string(),
    }
}

/// Parse the booking schedule date. The form submits `YYYY-MM-DDTHH:MM`
/// (datetime-local input); seconds and full RFC 3339 are accepted too.
pub fn parse_schedule_date(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_local()))
}

/// British-English long form, e.g. "Saturday 1 June 2024 at 10:00".
fn format_schedule_date(date: NaiveDateTime) -> String {
    date.format("%A %-d %B %Y at %H:%M").to_string()
}

/// Render the owner-facing booking alert. Every submitted field is embedded
/// verbatim; only the schedule date is reformatted.
pub fn booking_alert(booking: &BookingSubmission) -> Result<String, chrono::ParseError> {
    let scheduled = format_schedule_date(parse_schedule_date(&booking.schedule_date)?);

    Ok(format!(
        "\u{1F514} NEW BOOKING ALERT!\n\
         \n\
         Customer: {} {}\n\
         Mobile: {}\n\
         Email: {}\n\
         Address: {}, {}\n\
         Service: {}\n\
         Scheduled: {}\n\
         \n\
         Please contact customer to confirm.",
        booking.first_name,
        booking.surname,
        booking.mobile,
        booking.email,
        booking.address,
        booking.post_code,
        booking.service,
        scheduled,
    ))
}

/// Render the owner-facing quote-request alert.
pub fn quote_alert(quote: &QuoteSubmission) -> String {
    format!(
        "\u{1F514} NEW QUOTE REQUEST!\n\
         \n\
         Customer: {} {}\n\
         Phone: {}\n\
         Email: {}\n\
         Service: {}\n\
         Message: {}\n\
         \n\
         Please contact customer within 24 hours.",
        quote.first_name,
        quote.last_name,
        quote.phone,
        quote.email,
        quote.service,
        quote.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> BookingSubmission {
        serde_json::from_str(
            r#"{"firstName":"John","surname":"Doe","mobile":"07424185232",
                "email":"john@x.com","address":"1 Main St","postCode":"DE21 4EB",
                "service":"Window Cleaning","scheduleDate":"2024-06-01T10:00"}"#,
        )
        .unwrap()
    }

    #[test]
    fn destination_is_international_uk() {
        assert_eq!(destination(), "+447424185232");
    }

    #[test]
    fn booking_alert_embeds_every_field_verbatim() {
        let booking = sample_booking();
        let alert = booking_alert(&booking).unwrap();
        for expected in [
            "John",
            "Doe",
            "07424185232",
            "john@x.com",
            "1 Main St",
            "DE21 4EB",
            "Window Cleaning",
        ] {
            assert!(alert.contains(expected), "alert missing {expected}: {alert}");
        }
    }

    #[test]
    fn booking_alert_localizes_schedule_date() {
        let alert = booking_alert(&sample_booking()).unwrap();
        // 2024-06-01 was a Saturday
        assert!(alert.contains("Scheduled: Saturday 1 June 2024 at 10:00"));
    }

    #[test]
    fn schedule_date_accepts_seconds_and_rfc3339() {
        assert!(parse_schedule_date("2024-06-01T10:00:30").is_ok());
        assert!(parse_schedule_date("2024-06-01T10:00:00+01:00").is_ok());
        assert!(parse_schedule_date("not a date").is_err());
    }

    #[test]
    fn quote_alert_embeds_every_field_verbatim() {
        let quote: QuoteSubmission = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Smith","email":"jane@x.com",
                "phone":"07000000000","service":"Commercial Cleaning",
                "message":"Weekly office clean"}"#,
        )
        .unwrap();
        let alert = quote_alert(&quote);
        for expected in [
            "Jane",
            "Smith",
            "jane@x.com",
            "07000000000",
            "Commercial Cleaning",
            "Weekly office clean",
        ] {
            assert!(alert.contains(expected), "alert missing {expected}: {alert}");
        }
        assert!(alert.contains("NEW QUOTE REQUEST!"));
    }
}
