use std::sync::Arc;

use onboard_delivery::OnboardingSubmitter;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (validation clock, timeouts).
    pub config: Arc<ServerConfig>,
    /// Forwards accepted records to the intake endpoint.
    pub submitter: Arc<OnboardingSubmitter>,
}
