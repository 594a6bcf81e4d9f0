use onboard_core::onboarding::ValidationClock;

/// Server configuration loaded from environment variables.
///
/// Everything except the intake endpoint has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Endpoint that receives accepted onboarding records.
    pub onboard_url: String,
    /// Timeout for a single submission to `onboard_url` (default: `10`).
    pub submit_timeout_secs: u64,
    /// Time zone used to compute "today" for the start-date rule.
    pub validation_clock: ValidationClock,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ONBOARD_URL`          | (required)                 |
    /// | `SUBMIT_TIMEOUT_SECS`  | `10`                       |
    /// | `VALIDATION_TIMEZONE`  | `local` (`local` or `utc`) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let onboard_url = std::env::var("ONBOARD_URL").expect("ONBOARD_URL must be set");

        let submit_timeout_secs: u64 = std::env::var("SUBMIT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SUBMIT_TIMEOUT_SECS must be a valid u64");

        let validation_clock: ValidationClock = std::env::var("VALIDATION_TIMEZONE")
            .unwrap_or_else(|_| "local".into())
            .parse()
            .unwrap_or_else(|e| panic!("VALIDATION_TIMEZONE is invalid: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            onboard_url,
            submit_timeout_secs,
            validation_clock,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
