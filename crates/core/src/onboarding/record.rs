//! Onboarding record and validation result types.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::service::Service;
use crate::error::CoreError;

/// A fully validated onboarding submission.
///
/// String fields are trimmed, the budget is a whole number of US dollars and
/// the start date carries no time-of-day. Serializes with the camelCase keys
/// the external endpoint expects; an absent budget is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<i64>,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

/// Per-field rejection messages, keyed by JSON field name.
///
/// Holds at most one message per field; insertion order follows the
/// declaration order of the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    /// Record a message for `field` unless one is already present.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Rejected field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Comma-separated field names, for log lines and error display.
    pub fn field_list(&self) -> String {
        self.fields().collect::<Vec<_>>().join(", ")
    }
}

/// Outcome of validating one candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(OnboardingRecord),
    /// Never empty.
    Rejected(FieldErrors),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// Convert into a `Result`, mapping a rejection to [`CoreError::Rejected`].
    pub fn into_result(self) -> Result<OnboardingRecord, CoreError> {
        match self {
            ValidationOutcome::Accepted(record) => Ok(record),
            ValidationOutcome::Rejected(errors) => Err(CoreError::Rejected(errors)),
        }
    }
}
