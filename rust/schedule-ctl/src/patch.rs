//! Narrow schedule mutations.
//!
//! A patch mutates an existing schedule without replacing its definition.
//! The closed sum makes illegal combinations (pause and unpause together,
//! trigger mixed with backfill) unrepresentable; each dispatch carries
//! exactly one variant and the patch has no existence after the call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::OverlapPolicy;

/// A single lifecycle mutation applied to an existing schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchedulePatch {
    /// Pause the schedule, recording why.
    Pause { reason: String },
    /// Resume the schedule, recording why.
    Unpause { reason: String },
    /// Fire one action immediately, overriding the overlap policy.
    TriggerImmediately { overlap_policy: OverlapPolicy },
    /// Re-evaluate the timing rules over past ranges and emit the runs that
    /// would have occurred.
    Backfill { requests: Vec<BackfillRequest> },
}

/// One past time range to backfill.
///
/// Ordering of the bounds is validated by the service, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub overlap_policy: OverlapPolicy,
}
