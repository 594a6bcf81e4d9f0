//! Domain logic for client onboarding: the service catalogue, the
//! normalized record, the field validator and the prefill helper.
//!
//! Nothing in this crate performs I/O; the HTTP submission lives in
//! `onboard_delivery` and the server in `onboard_api`.

pub mod error;
pub mod onboarding;
