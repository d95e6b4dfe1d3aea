//! Error types for schedule assembly and lifecycle dispatch.
//!
//! Two families exist: validation errors raised locally before any remote
//! call is attempted, and remote errors raised by the schedule service
//! transport. Remote errors are always wrapped with the operation that
//! failed so they render as `failed to <op> schedule: <cause>`.

use thiserror::Error;

/// Errors produced while assembling schedules or dispatching lifecycle
/// operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The schedule id option was missing or empty.
    #[error("empty schedule id")]
    EmptyScheduleId,

    /// The namespace option was missing or empty.
    #[error("empty namespace")]
    EmptyNamespace,

    /// A calendar spec string did not decode.
    #[error("invalid calendar spec {input:?}: {reason}")]
    InvalidCalendarSpec { input: String, reason: String },

    /// An interval string did not match `<period>` or `<period>/<phase>`.
    #[error("invalid interval string {input:?}: {reason}")]
    InvalidInterval { input: String, reason: String },

    /// A duration option did not parse.
    #[error("invalid duration {input:?}: {reason}")]
    InvalidDuration { input: String, reason: String },

    /// A time option did not parse.
    #[error("invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: String },

    /// An overlap-policy name outside the closed set.
    #[error(
        "unknown overlap policy {0:?} (expected one of Skip, BufferOne, \
         BufferAll, CancelOther, TerminateOther, AllowAll)"
    )]
    UnknownOverlapPolicy(String),

    /// Spec validity window with start after end.
    #[error("start time {start} is after end time {end}")]
    InvertedWindow {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Toggle invoked with both pause and unpause.
    #[error("cannot specify both pause and unpause")]
    PauseConflict,

    /// Toggle invoked with neither pause nor unpause.
    #[error("must specify one of pause and unpause")]
    PauseMissing,

    /// Backfill invoked without one of its required time bounds.
    #[error("backfill requires {0}")]
    MissingBackfillBound(&'static str),

    /// The remote call itself failed.
    #[error("failed to {operation} schedule: {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ScheduleError {
    /// Wrap a transport error with the lifecycle operation that issued it.
    pub(crate) fn remote(operation: &'static str, source: ServiceError) -> Self {
        Self::Remote { operation, source }
    }
}

/// Transport-level errors from the remote schedule service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed service response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else if err.is_connect() {
            ServiceError::Connect(err.to_string())
        } else if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ServiceError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_errors_carry_operation_prefix() {
        let err = ScheduleError::remote("trigger", ServiceError::Timeout);
        assert_eq!(
            err.to_string(),
            "failed to trigger schedule: request timed out"
        );
    }

    #[test]
    fn unknown_policy_names_offender() {
        let err = ScheduleError::UnknownOverlapPolicy("skip".to_string());
        assert!(err.to_string().contains("\"skip\""));
        assert!(err.to_string().contains("BufferOne"));
    }

    #[test]
    fn service_status_display() {
        let err = ServiceError::Status {
            status: 404,
            message: "schedule not found".to_string(),
        };
        assert_eq!(err.to_string(), "service returned 404: schedule not found");
    }
}
