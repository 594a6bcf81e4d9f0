//! Client onboarding intake.
//!
//! Provides the service catalogue, the normalized record type, the
//! field-by-field validator and the `service` prefill parser, all as pure
//! logic. "Today" is always supplied by the caller through
//! [`ValidationClock`] so validation stays deterministic under test.

pub mod clock;
pub mod evaluator;
pub mod prefill;
pub mod record;
pub mod service;

pub use clock::ValidationClock;
pub use evaluator::validate_onboarding;
pub use prefill::parse_prefill_services;
pub use record::{FieldErrors, OnboardingRecord, ValidationOutcome};
pub use service::Service;

// ---------------------------------------------------------------------------
// Field names (JSON keys)
// ---------------------------------------------------------------------------

pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_COMPANY_NAME: &str = "companyName";
pub const FIELD_SERVICES: &str = "services";
pub const FIELD_BUDGET_USD: &str = "budgetUsd";
pub const FIELD_PROJECT_START_DATE: &str = "projectStartDate";
pub const FIELD_ACCEPT_TERMS: &str = "acceptTerms";

/// All fields in declaration order.
pub const ALL_FIELDS: &[&str] = &[
    FIELD_FULL_NAME,
    FIELD_EMAIL,
    FIELD_COMPANY_NAME,
    FIELD_SERVICES,
    FIELD_BUDGET_USD,
    FIELD_PROJECT_START_DATE,
    FIELD_ACCEPT_TERMS,
];
