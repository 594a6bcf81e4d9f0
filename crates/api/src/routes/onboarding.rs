//! Route definitions for the `/onboarding` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`.
///
/// ```text
/// POST   /           -> submit          (validate, then forward)
/// GET    /services   -> list_services
/// GET    /prefill    -> prefill         (?service=a,b)
/// POST   /validate   -> validate        (dry-run)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(onboarding::submit))
        .route("/services", get(onboarding::list_services))
        .route("/prefill", get(onboarding::prefill))
        .route("/validate", post(onboarding::validate))
}
