//! Onboarding validator -- pure logic, no clock reads.
//!
//! Each field is checked on its own: first its presence and JSON type, then
//! an ordered list of rules. Only the first failing rule of a field is
//! reported. The caller passes "today" in, so the start-date rule is as
//! deterministic as the others.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::record::{FieldErrors, OnboardingRecord, ValidationOutcome};
use super::service::Service;
use super::{
    FIELD_ACCEPT_TERMS, FIELD_BUDGET_USD, FIELD_COMPANY_NAME, FIELD_EMAIL, FIELD_FULL_NAME,
    FIELD_PROJECT_START_DATE, FIELD_SERVICES,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FULL_NAME_MIN_LENGTH: usize = 2;
pub const FULL_NAME_MAX_LENGTH: usize = 80;
pub const COMPANY_NAME_MIN_LENGTH: usize = 2;
pub const COMPANY_NAME_MAX_LENGTH: usize = 100;
pub const BUDGET_MIN_USD: i64 = 100;
pub const BUDGET_MAX_USD: i64 = 1_000_000;

/// Letters, spaces, apostrophes and hyphens.
static FULL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z '\-]+$").expect("valid regex"));

const MSG_REQUIRED: &str = "Required";
const MSG_INVALID_EMAIL: &str = "Invalid email address";
const MSG_NO_SERVICES: &str = "Select at least one service";
const MSG_INVALID_DATE: &str = "Invalid date";
const MSG_START_DATE_PAST: &str = "Project start date must be today or later";
const MSG_TERMS: &str = "You must accept the terms";

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// One check on an already-typed field value.
struct Rule<T: ?Sized> {
    holds: fn(&T) -> bool,
    message: &'static str,
}

const FULL_NAME_RULES: &[Rule<str>] = &[
    Rule {
        holds: full_name_long_enough,
        message: "Full name must be at least 2 characters",
    },
    Rule {
        holds: full_name_short_enough,
        message: "Full name must be at most 80 characters",
    },
    Rule {
        holds: full_name_charset,
        message: "Full name can only contain letters, spaces, apostrophes, or hyphens",
    },
];

const COMPANY_NAME_RULES: &[Rule<str>] = &[
    Rule {
        holds: company_name_long_enough,
        message: "Company name must be at least 2 characters",
    },
    Rule {
        holds: company_name_short_enough,
        message: "Company name must be at most 100 characters",
    },
];

const BUDGET_RULES: &[Rule<f64>] = &[
    Rule {
        holds: is_whole_number,
        message: "Budget must be an integer",
    },
    Rule {
        holds: budget_at_least_min,
        message: "Budget must be at least 100 USD",
    },
    Rule {
        holds: budget_at_most_max,
        message: "Budget must be at most 1,000,000 USD",
    },
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn full_name_long_enough(s: &str) -> bool {
    char_len(s) >= FULL_NAME_MIN_LENGTH
}

fn full_name_short_enough(s: &str) -> bool {
    char_len(s) <= FULL_NAME_MAX_LENGTH
}

fn full_name_charset(s: &str) -> bool {
    FULL_NAME_RE.is_match(s)
}

fn company_name_long_enough(s: &str) -> bool {
    char_len(s) >= COMPANY_NAME_MIN_LENGTH
}

fn company_name_short_enough(s: &str) -> bool {
    char_len(s) <= COMPANY_NAME_MAX_LENGTH
}

fn is_whole_number(n: &f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

fn budget_at_least_min(n: &f64) -> bool {
    *n >= BUDGET_MIN_USD as f64
}

fn budget_at_most_max(n: &f64) -> bool {
    *n <= BUDGET_MAX_USD as f64
}

fn first_violation<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Result<(), String> {
    match rules.iter().find(|rule| !(rule.holds)(value)) {
        Some(rule) => Err(rule.message.to_string()),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Validate a candidate onboarding record.
///
/// `data` is the raw JSON object as received; wrong shapes are reported as
/// field rejections rather than errors. `today` is the earliest acceptable
/// project start date.
pub fn validate_onboarding(data: &Map<String, Value>, today: NaiveDate) -> ValidationOutcome {
    let mut errors = FieldErrors::default();

    let full_name = collect(&mut errors, FIELD_FULL_NAME, check_full_name(data));
    let email = collect(&mut errors, FIELD_EMAIL, check_email(data));
    let company_name = collect(&mut errors, FIELD_COMPANY_NAME, check_company_name(data));
    let services = collect(&mut errors, FIELD_SERVICES, check_services(data));
    let budget_usd = collect(&mut errors, FIELD_BUDGET_USD, check_budget(data));
    let project_start_date = collect(
        &mut errors,
        FIELD_PROJECT_START_DATE,
        check_start_date(data, today),
    );
    let accept_terms = collect(&mut errors, FIELD_ACCEPT_TERMS, check_accept_terms(data));

    let (
        Some(full_name),
        Some(email),
        Some(company_name),
        Some(services),
        Some(budget_usd),
        Some(project_start_date),
        Some(accept_terms),
    ) = (
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    )
    else {
        return ValidationOutcome::Rejected(errors);
    };

    ValidationOutcome::Accepted(OnboardingRecord {
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    })
}

fn collect<T>(errors: &mut FieldErrors, field: &str, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Shape helpers
// ---------------------------------------------------------------------------

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(expected: &str, value: &Value) -> String {
    format!("Expected {expected}, received {}", type_name(value))
}

fn required<'a>(data: &'a Map<String, Value>, field: &str) -> Result<&'a Value, String> {
    data.get(field).ok_or_else(|| MSG_REQUIRED.to_string())
}

fn trimmed_string(data: &Map<String, Value>, field: &str) -> Result<String, String> {
    let value = required(data, field)?;
    let s = value
        .as_str()
        .ok_or_else(|| type_mismatch("string", value))?;
    Ok(s.trim().to_string())
}

// ---------------------------------------------------------------------------
// Per-field checks
// ---------------------------------------------------------------------------

fn check_full_name(data: &Map<String, Value>) -> Result<String, String> {
    let name = trimmed_string(data, FIELD_FULL_NAME)?;
    first_violation(name.as_str(), FULL_NAME_RULES)?;
    Ok(name)
}

fn check_email(data: &Map<String, Value>) -> Result<String, String> {
    let email = trimmed_string(data, FIELD_EMAIL)?;
    if !is_email(&email) {
        return Err(MSG_INVALID_EMAIL.to_string());
    }
    Ok(email)
}

/// Standard address syntax, with a dotted domain and no whitespace.
fn is_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return false;
    }
    candidate.validate_email()
}

fn check_company_name(data: &Map<String, Value>) -> Result<String, String> {
    let name = trimmed_string(data, FIELD_COMPANY_NAME)?;
    first_violation(name.as_str(), COMPANY_NAME_RULES)?;
    Ok(name)
}

fn check_services(data: &Map<String, Value>) -> Result<Vec<Service>, String> {
    let value = required(data, FIELD_SERVICES)?;
    let items = value
        .as_array()
        .ok_or_else(|| type_mismatch("array", value))?;
    let services = items
        .iter()
        .map(parse_service)
        .collect::<Result<Vec<_>, _>>()?;
    if services.is_empty() {
        return Err(MSG_NO_SERVICES.to_string());
    }
    Ok(services)
}

fn parse_service(item: &Value) -> Result<Service, String> {
    item.as_str().and_then(Service::from_wire).ok_or_else(|| {
        let received = match item {
            Value::String(s) => format!("'{s}'"),
            other => other.to_string(),
        };
        format!(
            "Invalid enum value. Expected {}, received {received}",
            Service::expected_list()
        )
    })
}

/// Absent is fine; `null` is not a number.
fn check_budget(data: &Map<String, Value>) -> Result<Option<i64>, String> {
    let Some(value) = data.get(FIELD_BUDGET_USD) else {
        return Ok(None);
    };
    let amount = value
        .as_f64()
        .ok_or_else(|| type_mismatch("number", value))?;
    first_violation(&amount, BUDGET_RULES)?;
    Ok(Some(amount as i64))
}

fn check_start_date(data: &Map<String, Value>, today: NaiveDate) -> Result<NaiveDate, String> {
    let value = required(data, FIELD_PROJECT_START_DATE)?;
    let raw = value.as_str().ok_or_else(|| type_mismatch("date", value))?;
    let date = parse_calendar_date(raw.trim()).ok_or_else(|| MSG_INVALID_DATE.to_string())?;
    if date < today {
        return Err(MSG_START_DATE_PAST.to_string());
    }
    Ok(date)
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its date in its own
/// offset.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn check_accept_terms(data: &Map<String, Value>) -> Result<bool, String> {
    let value = required(data, FIELD_ACCEPT_TERMS)?;
    let accepted = value
        .as_bool()
        .ok_or_else(|| type_mismatch("boolean", value))?;
    if !accepted {
        return Err(MSG_TERMS.to_string());
    }
    Ok(accepted)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
