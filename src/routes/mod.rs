pub mod health;
pub mod metrics;
pub mod notify;

use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;

/// Application routes. Only POST is registered on the notify endpoints, so
/// any other method gets axum's 405 before the body is touched.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/notify/booking", post(notify::notify_booking))
        .route("/api/notify/quote", post(notify::notify_quote))
        .with_state(state)
}
