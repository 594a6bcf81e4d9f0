//! Handlers for the client onboarding intake.
//!
//! The submit flow reads "today" once from the configured clock, validates
//! the raw JSON body field by field, and only then forwards the normalized
//! record to the intake endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use onboard_core::error::CoreError;
use onboard_core::onboarding::{
    parse_prefill_services, validate_onboarding, OnboardingRecord, Service, ValidationOutcome,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters / payloads
// ---------------------------------------------------------------------------

/// Query parameters for the prefill endpoint.
#[derive(Debug, Deserialize)]
pub struct PrefillParams {
    /// Comma-separated service labels, e.g. `UI/UX,Web Dev`.
    pub service: Option<String>,
}

/// Default form values derived from the link the client followed.
#[derive(Debug, Serialize)]
pub struct PrefillResponse {
    pub services: Vec<Service>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap the JSON body into an object, turning extractor failures into our
/// own error envelope.
fn candidate(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Map<String, Value>> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// Validate against the configured clock's current date.
fn validate_candidate(state: &AppState, data: &Map<String, Value>) -> AppResult<OnboardingRecord> {
    let today = state.config.validation_clock.today();
    match validate_onboarding(data, today) {
        ValidationOutcome::Accepted(record) => Ok(record),
        ValidationOutcome::Rejected(errors) => {
            tracing::info!(
                fields = %errors.field_list(),
                %today,
                "Onboarding record rejected"
            );
            Err(AppError::Core(CoreError::Rejected(errors)))
        }
    }
}

// ---------------------------------------------------------------------------
// GET /onboarding/services
// ---------------------------------------------------------------------------

/// List the services a client can choose from.
pub async fn list_services() -> Json<DataResponse<Vec<Service>>> {
    Json(DataResponse {
        data: Service::ALL.to_vec(),
    })
}

// ---------------------------------------------------------------------------
// GET /onboarding/prefill
// ---------------------------------------------------------------------------

/// Derive the default `services` selection from `?service=a,b`.
///
/// Unknown labels are dropped silently.
pub async fn prefill(Query(params): Query<PrefillParams>) -> Json<DataResponse<PrefillResponse>> {
    let services = parse_prefill_services(params.service.as_deref());
    Json(DataResponse {
        data: PrefillResponse { services },
    })
}

// ---------------------------------------------------------------------------
// POST /onboarding/validate
// ---------------------------------------------------------------------------

/// Validate a candidate record without submitting it.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<OnboardingRecord>>> {
    let data = candidate(payload)?;
    let record = validate_candidate(&state, &data)?;
    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// POST /onboarding
// ---------------------------------------------------------------------------

/// Validate a candidate record and forward it to the intake endpoint.
///
/// Returns the submitted record on success. Any delivery failure surfaces as
/// the single generic submission error.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let data = candidate(payload)?;
    let record = validate_candidate(&state, &data)?;

    let upstream_status = state.submitter.submit(&record).await?;

    tracing::info!(
        upstream_status,
        services = record.services.len(),
        has_budget = record.budget_usd.is_some(),
        "Onboarding submission accepted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
