use crate::onboarding::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// One message per rejected field, in declaration order.
    #[error("Validation failed for fields: {}", .0.field_list())]
    Rejected(FieldErrors),
}
