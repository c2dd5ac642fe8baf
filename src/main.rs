use std::sync::Arc;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use aplus_notify::app_state::AppState;
use aplus_notify::config::AppConfig;
use aplus_notify::routes;
use aplus_notify::services::provider;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing aplus-notify server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "notifications_dispatched_total",
        "Alert SMS handed to a provider successfully"
    );
    metrics::describe_counter!(
        "notifications_degraded_total",
        "Submissions acknowledged without SMS because no provider is configured"
    );
    metrics::describe_counter!(
        "notifications_failed_total",
        "Submissions that ended in the failure response"
    );
    metrics::describe_histogram!(
        "provider_send_seconds",
        "Time spent on the outbound provider call"
    );

    // Pick the SMS backend from whichever credential group is present
    let sms_provider = provider::select_provider(&config);
    match &sms_provider {
        Some(p) => tracing::info!(provider = p.name(), "SMS provider configured"),
        None => tracing::warn!("no SMS provider configured; running in log-only mode"),
    }

    let state = AppState::new(sms_provider);

    // Build API routes
    let app = routes::router(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64 KB limit

    tracing::info!("Starting aplus-notify on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
