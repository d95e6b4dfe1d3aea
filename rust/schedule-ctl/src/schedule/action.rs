//! The unit of work a schedule triggers.
//!
//! Modeled as a closed union over action kinds; this core supports exactly
//! one kind, starting a job on the execution service. The union stays an
//! enum so future kinds extend it without a bag of optional fields.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::Result;

/// Raw action options as resolved by the surrounding tool.
#[derive(Debug, Clone, Default)]
pub struct ActionOptions {
    /// Job identifier; a fresh one is generated when unset.
    pub job_id: Option<String>,
    /// Registered job type name on the execution service.
    pub job_type: String,
    /// Queue the job is dispatched on.
    pub task_queue: String,
    /// Overall execution timeout in seconds. Zero or unset means no limit.
    pub execution_timeout_secs: Option<u64>,
    /// Single-run timeout in seconds. Zero or unset means no limit.
    pub run_timeout_secs: Option<u64>,
    /// Per-task timeout in seconds. Zero or unset means no limit.
    pub task_timeout_secs: Option<u64>,
    /// Already-decoded input payload passed to the job.
    pub input: Option<serde_json::Value>,
}

/// What a schedule does when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleAction {
    /// Start a job on the execution service.
    StartJob(StartJobAction),
}

/// A startable job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartJobAction {
    pub job_id: String,
    pub job_type: String,
    pub task_queue: String,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none", default)]
    pub execution_timeout: Option<Duration>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none", default)]
    pub run_timeout: Option<Duration>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none", default)]
    pub task_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
}

impl ScheduleAction {
    /// Build the start-job action from raw options.
    ///
    /// A missing job id is replaced with a fresh random identifier; the
    /// service stays authoritative for collisions, so no registry check
    /// happens here.
    pub fn from_options(options: &ActionOptions) -> Result<Self> {
        let job_id = match &options.job_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => Uuid::new_v4().to_string(),
        };

        Ok(Self::StartJob(StartJobAction {
            job_id,
            job_type: options.job_type.clone(),
            task_queue: options.task_queue.clone(),
            execution_timeout: secs_to_duration(options.execution_timeout_secs),
            run_timeout: secs_to_duration(options.run_timeout_secs),
            task_timeout: secs_to_duration(options.task_timeout_secs),
            input: options.input.clone(),
        }))
    }
}

/// Zero seconds means "not set" and is dropped rather than sent as a
/// zero-length timeout.
fn secs_to_duration(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|s| *s > 0).map(Duration::from_secs)
}
