//! Lifecycle operations against the remote schedule service.
//!
//! One entry point per operation: create, update, toggle (pause/unpause),
//! trigger, backfill, describe, delete, and list. Each validates its
//! options locally, stamps caller identity and a fresh request id where the
//! operation mutates, performs exactly one remote call under the caller's
//! cancellation scope, and returns the raw response for rendering. Nothing
//! is retried here; ambiguous-timeout retry policy for create and update
//! belongs to the caller.

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::client::{
    CreateScheduleRequest, DeleteScheduleRequest, DescribeScheduleRequest, ListSchedulesRequest,
    PatchScheduleRequest, UpdateScheduleRequest,
};
use crate::error::{Result, ScheduleError};
use crate::patch::{BackfillRequest, SchedulePatch};
use crate::schedule::{OverlapPolicy, Schedule, ScheduleOptions};
use crate::timefmt;
use crate::ScheduleContext;

/// Reason recorded on pause/unpause when the caller gives none.
pub const DEFAULT_TOGGLE_REASON: &str = "(no reason provided)";

/// Options for the pause/unpause toggle.
#[derive(Debug, Clone, Default)]
pub struct ToggleOptions {
    pub pause: bool,
    pub unpause: bool,
    /// Free-text reason; defaults to [`DEFAULT_TOGGLE_REASON`].
    pub reason: Option<String>,
}

/// Options for an immediate trigger.
#[derive(Debug, Clone, Default)]
pub struct TriggerOptions {
    /// Overlap override for the triggered run; empty means `Unspecified`.
    pub overlap_policy: Option<String>,
}

/// Options for a time-range backfill.
#[derive(Debug, Clone, Default)]
pub struct BackfillOptions {
    /// Start of the range. Required.
    pub start_time: Option<String>,
    /// End of the range. Required.
    pub end_time: Option<String>,
    pub overlap_policy: Option<String>,
}

/// Create a new schedule from a freshly assembled definition.
pub async fn create_schedule(
    ctx: &ScheduleContext,
    schedule_id: &str,
    options: &ScheduleOptions,
) -> Result<Value> {
    require_target(ctx, schedule_id)?;
    let schedule = Schedule::from_options(options, Utc::now())?;

    let request = CreateScheduleRequest {
        namespace: ctx.namespace.clone(),
        schedule_id: schedule_id.to_string(),
        schedule,
        identity: ctx.identity.clone(),
        request_id: fresh_request_id(),
    };

    tracing::debug!(schedule_id, namespace = %ctx.namespace, "creating schedule");
    ctx.service
        .create_schedule(request)
        .await
        .map_err(|e| ScheduleError::remote("create", e))
}

/// Replace a schedule's full definition. Never a merge.
pub async fn update_schedule(
    ctx: &ScheduleContext,
    schedule_id: &str,
    options: &ScheduleOptions,
) -> Result<Value> {
    require_target(ctx, schedule_id)?;
    let schedule = Schedule::from_options(options, Utc::now())?;

    let request = UpdateScheduleRequest {
        namespace: ctx.namespace.clone(),
        schedule_id: schedule_id.to_string(),
        schedule,
        identity: ctx.identity.clone(),
        request_id: fresh_request_id(),
    };

    tracing::debug!(schedule_id, namespace = %ctx.namespace, "updating schedule");
    ctx.service
        .update_schedule(request)
        .await
        .map_err(|e| ScheduleError::remote("update", e))
}

/// Pause or unpause a schedule. Exactly one of the two must be requested.
pub async fn toggle_schedule(
    ctx: &ScheduleContext,
    schedule_id: &str,
    options: &ToggleOptions,
) -> Result<Value> {
    require_target(ctx, schedule_id)?;

    if options.pause && options.unpause {
        return Err(ScheduleError::PauseConflict);
    }
    if !options.pause && !options.unpause {
        return Err(ScheduleError::PauseMissing);
    }

    let reason = options
        .reason
        .clone()
        .unwrap_or_else(|| DEFAULT_TOGGLE_REASON.to_string());
    let patch = if options.pause {
        SchedulePatch::Pause { reason }
    } else {
        SchedulePatch::Unpause { reason }
    };

    dispatch_patch(ctx, schedule_id, "toggle", patch).await
}

/// Fire one action immediately, outside the timing rules.
pub async fn trigger_schedule(
    ctx: &ScheduleContext,
    schedule_id: &str,
    options: &TriggerOptions,
) -> Result<Value> {
    require_target(ctx, schedule_id)?;
    let overlap_policy = OverlapPolicy::resolve(options.overlap_policy.as_deref())?;

    dispatch_patch(
        ctx,
        schedule_id,
        "trigger",
        SchedulePatch::TriggerImmediately { overlap_policy },
    )
    .await
}

/// Backfill a past time range. Both bounds are required locally; their
/// ordering is validated by the service.
pub async fn backfill_schedule(
    ctx: &ScheduleContext,
    schedule_id: &str,
    options: &BackfillOptions,
) -> Result<Value> {
    require_target(ctx, schedule_id)?;

    let now = Utc::now();
    let start_raw = options
        .start_time
        .as_deref()
        .ok_or(ScheduleError::MissingBackfillBound("a start time"))?;
    let end_raw = options
        .end_time
        .as_deref()
        .ok_or(ScheduleError::MissingBackfillBound("an end time"))?;
    let start_time = timefmt::parse_time(start_raw, now)?;
    let end_time = timefmt::parse_time(end_raw, now)?;
    let overlap_policy = OverlapPolicy::resolve(options.overlap_policy.as_deref())?;

    dispatch_patch(
        ctx,
        schedule_id,
        "backfill",
        SchedulePatch::Backfill {
            requests: vec![BackfillRequest {
                start_time,
                end_time,
                overlap_policy,
            }],
        },
    )
    .await
}

/// Read a schedule's configuration and current state.
pub async fn describe_schedule(ctx: &ScheduleContext, schedule_id: &str) -> Result<Value> {
    require_target(ctx, schedule_id)?;

    let request = DescribeScheduleRequest {
        namespace: ctx.namespace.clone(),
        schedule_id: schedule_id.to_string(),
    };
    ctx.service
        .describe_schedule(request)
        .await
        .map_err(|e| ScheduleError::remote("describe", e))
}

/// Delete a schedule.
pub async fn delete_schedule(ctx: &ScheduleContext, schedule_id: &str) -> Result<Value> {
    require_target(ctx, schedule_id)?;

    let request = DeleteScheduleRequest {
        namespace: ctx.namespace.clone(),
        schedule_id: schedule_id.to_string(),
        identity: ctx.identity.clone(),
    };
    tracing::debug!(schedule_id, namespace = %ctx.namespace, "deleting schedule");
    ctx.service
        .delete_schedule(request)
        .await
        .map_err(|e| ScheduleError::remote("delete", e))
}

/// Enumerate the active namespace's schedules.
pub async fn list_schedules(ctx: &ScheduleContext) -> Result<Value> {
    if ctx.namespace.is_empty() {
        return Err(ScheduleError::EmptyNamespace);
    }

    let request = ListSchedulesRequest {
        namespace: ctx.namespace.clone(),
    };
    ctx.service
        .list_schedules(request)
        .await
        .map_err(|e| ScheduleError::remote("list", e))
}

fn require_target(ctx: &ScheduleContext, schedule_id: &str) -> Result<()> {
    if ctx.namespace.is_empty() {
        return Err(ScheduleError::EmptyNamespace);
    }
    if schedule_id.is_empty() {
        return Err(ScheduleError::EmptyScheduleId);
    }
    Ok(())
}

fn fresh_request_id() -> String {
    Uuid::new_v4().to_string()
}

async fn dispatch_patch(
    ctx: &ScheduleContext,
    schedule_id: &str,
    operation: &'static str,
    patch: SchedulePatch,
) -> Result<Value> {
    let request = PatchScheduleRequest {
        namespace: ctx.namespace.clone(),
        schedule_id: schedule_id.to_string(),
        patch,
        identity: ctx.identity.clone(),
        request_id: fresh_request_id(),
    };

    tracing::debug!(schedule_id, namespace = %ctx.namespace, operation, "patching schedule");
    ctx.service
        .patch_schedule(request)
        .await
        .map_err(|e| ScheduleError::remote(operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ScheduleService, ServiceResult};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// A service that must never be reached; local validation should reject
    /// the call first.
    struct Unreachable;

    #[async_trait]
    impl ScheduleService for Unreachable {
        async fn create_schedule(&self, _: CreateScheduleRequest) -> ServiceResult<Value> {
            panic!("create reached the service");
        }
        async fn update_schedule(&self, _: UpdateScheduleRequest) -> ServiceResult<Value> {
            panic!("update reached the service");
        }
        async fn patch_schedule(&self, _: PatchScheduleRequest) -> ServiceResult<Value> {
            panic!("patch reached the service");
        }
        async fn describe_schedule(&self, _: DescribeScheduleRequest) -> ServiceResult<Value> {
            panic!("describe reached the service");
        }
        async fn delete_schedule(&self, _: DeleteScheduleRequest) -> ServiceResult<Value> {
            panic!("delete reached the service");
        }
        async fn list_schedules(&self, _: ListSchedulesRequest) -> ServiceResult<Value> {
            panic!("list reached the service");
        }
    }

    fn ctx() -> ScheduleContext {
        ScheduleContext::new(Arc::new(Unreachable), "default")
    }

    fn no_namespace_ctx() -> ScheduleContext {
        ScheduleContext::new(Arc::new(Unreachable), "")
    }

    #[tokio::test]
    async fn empty_schedule_id_is_rejected_locally() {
        let err = describe_schedule(&ctx(), "").await.unwrap_err();
        assert_eq!(err.to_string(), "empty schedule id");
    }

    #[tokio::test]
    async fn empty_namespace_is_rejected_locally() {
        let err = list_schedules(&no_namespace_ctx()).await.unwrap_err();
        assert_eq!(err.to_string(), "empty namespace");

        let err = delete_schedule(&no_namespace_ctx(), "nightly")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "empty namespace");
    }

    #[tokio::test]
    async fn toggle_requires_exactly_one_direction() {
        let both = ToggleOptions {
            pause: true,
            unpause: true,
            reason: None,
        };
        let err = toggle_schedule(&ctx(), "nightly", &both).await.unwrap_err();
        assert_eq!(err.to_string(), "cannot specify both pause and unpause");

        let neither = ToggleOptions::default();
        let err = toggle_schedule(&ctx(), "nightly", &neither)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "must specify one of pause and unpause");
    }

    #[tokio::test]
    async fn backfill_requires_both_bounds() {
        let missing_start = BackfillOptions {
            end_time: Some("2024-04-02T00:00:00Z".to_string()),
            ..Default::default()
        };
        let err = backfill_schedule(&ctx(), "nightly", &missing_start)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "backfill requires a start time");

        let missing_end = BackfillOptions {
            start_time: Some("2024-04-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let err = backfill_schedule(&ctx(), "nightly", &missing_end)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "backfill requires an end time");
    }

    #[tokio::test]
    async fn bad_overlap_policy_is_rejected_locally() {
        let options = TriggerOptions {
            overlap_policy: Some("Sometimes".to_string()),
        };
        let err = trigger_schedule(&ctx(), "nightly", &options)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Sometimes"));
    }

    #[tokio::test]
    async fn malformed_schedule_options_fail_before_dispatch() {
        let options = ScheduleOptions {
            spec: crate::spec::SpecOptions {
                intervals: vec!["1h/2h/3h".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = create_schedule(&ctx(), "nightly", &options)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("1h/2h/3h"));
    }
}
