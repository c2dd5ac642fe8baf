use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sms: SmsHealth,
}

#[derive(Serialize)]
pub struct SmsHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<&'static str>,
}

/// GET /health — liveness plus which SMS backend (if any) is configured.
/// The degraded log-only mode is a deliberate state, so it still reports 200.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let sms = match &state.provider {
        Some(provider) => SmsHealth {
            status: "configured".to_string(),
            provider: Some(provider.name()),
        },
        None => SmsHealth {
            status: "not_configured".to_string(),
            provider: None,
        },
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sms,
    };

    (StatusCode::OK, Json(response))
}
