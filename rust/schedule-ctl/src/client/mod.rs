//! Remote schedule service abstraction.
//!
//! The execution service that evaluates schedules and dispatches work is an
//! external collaborator; this module defines the seam. [`ScheduleService`]
//! is the trait lifecycle operations dispatch through, with the HTTP/JSON
//! implementation in [`http`]. Responses come back as raw
//! [`serde_json::Value`] and are rendered by the caller, untouched.

pub mod http;

pub use http::HttpScheduleService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;
use crate::patch::SchedulePatch;
use crate::schedule::Schedule;

/// Result of one remote call.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Request envelope for `create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub namespace: String,
    pub schedule_id: String,
    pub schedule: Schedule,
    /// Caller identity; transport metadata only.
    pub identity: String,
    /// Fresh idempotency token, one per call.
    pub request_id: String,
}

/// Request envelope for `update` — a full replace of the definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub namespace: String,
    pub schedule_id: String,
    pub schedule: Schedule,
    pub identity: String,
    pub request_id: String,
}

/// Request envelope for pause, unpause, trigger, and backfill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchScheduleRequest {
    pub namespace: String,
    pub schedule_id: String,
    pub patch: SchedulePatch,
    pub identity: String,
    pub request_id: String,
}

/// Request envelope for `describe`. A plain read; nothing is stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeScheduleRequest {
    pub namespace: String,
    pub schedule_id: String,
}

/// Request envelope for `delete`. Carries identity but no request id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteScheduleRequest {
    pub namespace: String,
    pub schedule_id: String,
    pub identity: String,
}

/// Request envelope for `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchedulesRequest {
    pub namespace: String,
}

/// The remote schedule service seam.
///
/// Each call maps to one synchronous remote operation and blocks the
/// awaiting caller until the service responds or the caller's cancellation
/// scope expires. Implementations never retry; conflicting operations on
/// the same schedule id are serialized by the service, not here.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Create a new schedule.
    async fn create_schedule(&self, request: CreateScheduleRequest) -> ServiceResult<Value>;

    /// Replace an existing schedule's full definition.
    async fn update_schedule(&self, request: UpdateScheduleRequest) -> ServiceResult<Value>;

    /// Apply a narrow mutation (pause, unpause, trigger, backfill).
    async fn patch_schedule(&self, request: PatchScheduleRequest) -> ServiceResult<Value>;

    /// Read a schedule's configuration and current state.
    async fn describe_schedule(&self, request: DescribeScheduleRequest) -> ServiceResult<Value>;

    /// Delete a schedule.
    async fn delete_schedule(&self, request: DeleteScheduleRequest) -> ServiceResult<Value>;

    /// Enumerate the namespace's schedules.
    async fn list_schedules(&self, request: ListSchedulesRequest) -> ServiceResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleOptions;
    use chrono::Utc;

    #[test]
    fn create_envelope_serializes_whole_schedule() {
        let schedule = Schedule::from_options(&ScheduleOptions::default(), Utc::now()).unwrap();
        let request = CreateScheduleRequest {
            namespace: "default".to_string(),
            schedule_id: "nightly".to_string(),
            schedule,
            identity: "schedule-ctl@test".to_string(),
            request_id: "r-1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["namespace"], "default");
        assert_eq!(json["schedule_id"], "nightly");
        assert_eq!(json["schedule"]["action"]["kind"], "start_job");
        assert_eq!(json["request_id"], "r-1");
    }

    #[test]
    fn delete_envelope_has_no_request_id() {
        let request = DeleteScheduleRequest {
            namespace: "default".to_string(),
            schedule_id: "nightly".to_string(),
            identity: "schedule-ctl@test".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("request_id").is_none());
    }
}
