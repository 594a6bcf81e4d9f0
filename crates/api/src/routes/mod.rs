pub mod health;
pub mod onboarding;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /onboarding                  submit (POST)
/// /onboarding/services         service catalogue (GET)
/// /onboarding/prefill          default services from ?service=a,b (GET)
/// /onboarding/validate         dry-run validation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/onboarding", onboarding::router())
}
