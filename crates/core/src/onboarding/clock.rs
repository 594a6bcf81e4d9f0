//! Source of "today" for the start-date rule.

use std::str::FromStr;

use chrono::{Local, NaiveDate, Utc};

use crate::error::CoreError;

/// Time zone in which the current calendar day is computed.
///
/// Read once per validation call so a request that straddles midnight is
/// judged against a single date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationClock {
    /// The process-local time zone.
    #[default]
    Local,
    Utc,
}

impl ValidationClock {
    pub const VALID_NAMES: &'static [&'static str] = &["local", "utc"];

    /// Current calendar date in this clock's zone.
    pub fn today(self) -> NaiveDate {
        match self {
            ValidationClock::Local => Local::now().date_naive(),
            ValidationClock::Utc => Utc::now().date_naive(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationClock::Local => "local",
            ValidationClock::Utc => "utc",
        }
    }
}

impl FromStr for ValidationClock {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ValidationClock::Local),
            "utc" => Ok(ValidationClock::Utc),
            _ => Err(CoreError::Validation(format!(
                "Invalid validation time zone '{s}'. Must be one of: {:?}",
                Self::VALID_NAMES
            ))),
        }
    }
}
