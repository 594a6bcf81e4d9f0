use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use onboard_core::error::CoreError;
use onboard_delivery::SubmitError;
use serde_json::json;

/// The only message a client ever sees for a failed submission.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SubmitError`] for outbound
/// delivery failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses of the form `{ "error": ..., "code": ... }`; validation
/// rejections also carry a `fields` map.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `onboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The intake endpoint could not be reached or refused the record.
    #[error(transparent)]
    Submission(#[from] SubmitError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Rejected(fields)) => {
                let body = json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::Core(CoreError::Validation(msg)) => {
                error_body(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }

            // --- Outbound delivery ---
            AppError::Submission(err) => {
                // Details are already logged by the submitter; the client only
                // gets the generic banner message.
                tracing::warn!(error = %err, "Reporting submission failure to client");
                error_body(
                    StatusCode::BAD_GATEWAY,
                    "SUBMISSION_FAILED",
                    SUBMISSION_FAILED_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        }
    }
}

fn error_body(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}
