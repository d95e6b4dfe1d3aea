//! Client configuration for the remote schedule service.

/// Connection settings for the schedule service client.
#[derive(Debug, Clone)]
pub struct ServiceClientConfig {
    /// Service base URL (e.g. "http://localhost:7243").
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ServiceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:7243".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ServiceClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("SCHEDULE_SERVICE_URL").unwrap_or(defaults.endpoint),
            timeout_secs: std::env::var("SCHEDULE_SERVICE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: std::env::var("SCHEDULE_SERVICE_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
        }
    }
}

/// Caller identity stamped on every mutating request.
///
/// Mirrors the `<tool>@<host>` convention; transport metadata only, never
/// part of the schedule's durable state.
pub fn default_identity() -> String {
    let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    format!("schedule-ctl@{host}")
}
