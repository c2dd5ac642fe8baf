use std::sync::Arc;

use crate::services::provider::SmsProvider;

/// Shared application state passed to all route handlers. `provider` is
/// `None` when no credential group is configured, which puts the dispatcher
/// in the degraded log-only mode.
#[derive(Clone)]
pub struct AppState {
    pub provider: Option<Arc<dyn SmsProvider>>,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn SmsProvider>>) -> Self {
        Self { provider }
    }
}
