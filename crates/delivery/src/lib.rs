//! Outbound delivery of accepted onboarding records.
//!
//! [`OnboardingSubmitter`] forwards a validated record to the configured
//! intake endpoint as a single JSON POST.

pub mod submitter;

pub use submitter::{OnboardingSubmitter, SubmitError};
