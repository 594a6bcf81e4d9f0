//! Request handlers.
//!
//! Handlers delegate to `onboard_core` for validation and to
//! `onboard_delivery` for submission, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod onboarding;
