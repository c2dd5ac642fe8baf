use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use garde::Validate;
use metrics::{counter, histogram};

use crate::app_state::AppState;
use crate::models::dispatch::{DispatchResponse, ErrorResponse};
use crate::models::submission::{BookingSubmission, QuoteSubmission};
use crate::services::alert;
use crate::services::provider::{ProviderError, ProviderMessageId};

/// Everything that can go wrong between receiving a body and getting a
/// provider message id back. All variants collapse into one 500 response;
/// nothing is retried.
#[derive(Debug, thiserror::Error)]
enum DispatchError {
    #[error("invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("invalid submission: {0}")]
    Validation(#[from] garde::Report),

    #[error("invalid schedule date: {0}")]
    ScheduleDate(#[from] chrono::ParseError),

    #[error("SMS delivery failed: {0}")]
    Provider(#[from] ProviderError),
}

fn failure(summary: &str, err: DispatchError) -> Response {
    tracing::error!(error = %err, "{summary}");
    counter!("notifications_failed_total").increment(1);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(summary, err.to_string())),
    )
        .into_response()
}

/// One attempt against the configured provider, with send timing recorded.
async fn deliver(
    state: &AppState,
    message: &str,
) -> Result<Option<ProviderMessageId>, ProviderError> {
    let Some(provider) = &state.provider else {
        return Ok(None);
    };

    let start = Instant::now();
    let result = provider.send(message, &alert::destination()).await;
    histogram!("provider_send_seconds").record(start.elapsed().as_secs_f64());

    result.map(Some)
}

/// POST /api/notify/booking — relay a booking submission as an SMS alert.
///
/// The body is taken raw and parsed here so a malformed payload surfaces as
/// this endpoint's own 500 failure shape rather than an extractor rejection.
pub async fn notify_booking(State(state): State<AppState>, body: String) -> Response {
    match dispatch_booking(&state, &body).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => failure("Failed to process booking", err),
    }
}

async fn dispatch_booking(
    state: &AppState,
    body: &str,
) -> Result<DispatchResponse, DispatchError> {
    let booking: BookingSubmission = serde_json::from_str(body)?;
    booking.validate()?;
    let message = alert::booking_alert(&booking)?;

    match deliver(state, &message).await? {
        Some(id) => {
            counter!("notifications_dispatched_total", "kind" => "booking").increment(1);
            tracing::info!(
                message_id = id.value(),
                service = %booking.service_kind(),
                "booking SMS sent"
            );
            Ok(DispatchResponse::booking_sent(id))
        }
        None => {
            counter!("notifications_degraded_total", "kind" => "booking").increment(1);
            tracing::info!(alert = %message, "SMS not configured; booking alert logged only");
            Ok(DispatchResponse::booking_degraded(booking))
        }
    }
}

/// POST /api/notify/quote — relay a quote request as an SMS alert.
pub async fn notify_quote(State(state): State<AppState>, body: String) -> Response {
    match dispatch_quote(&state, &body).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => failure("Failed to process quote request", err),
    }
}

async fn dispatch_quote(state: &AppState, body: &str) -> Result<DispatchResponse, DispatchError> {
    let quote: QuoteSubmission = serde_json::from_str(body)?;
    quote.validate()?;
    let message = alert::quote_alert(&quote);

    match deliver(state, &message).await? {
        Some(id) => {
            counter!("notifications_dispatched_total", "kind" => "quote").increment(1);
            tracing::info!(
                message_id = id.value(),
                service = %quote.service_kind(),
                "quote SMS sent"
            );
            Ok(DispatchResponse::quote_sent(id))
        }
        None => {
            counter!("notifications_degraded_total", "kind" => "quote").increment(1);
            tracing::info!(alert = %message, "SMS not configured; quote alert logged only");
            Ok(DispatchResponse::quote_degraded(quote))
        }
    }
}
