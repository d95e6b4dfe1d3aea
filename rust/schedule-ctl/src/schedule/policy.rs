//! Overlap-policy resolution and schedule policies.
//!
//! The overlap policy decides what happens when a firing comes due while a
//! previous run from the same schedule is still active. Names resolve
//! case-sensitively against a closed set; an empty name means the service
//! default (`Unspecified`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, ScheduleError};
use crate::timefmt;

/// What to do when a new firing overlaps a still-running action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapPolicy {
    /// Let the service apply its default.
    #[default]
    Unspecified,
    /// Drop the new firing.
    Skip,
    /// Hold at most one firing to start after the current run finishes.
    BufferOne,
    /// Hold every missed firing and run them sequentially.
    BufferAll,
    /// Cancel the running action, then start the new one.
    CancelOther,
    /// Terminate the running action, then start the new one.
    TerminateOther,
    /// Start the new action in parallel.
    AllowAll,
}

impl FromStr for OverlapPolicy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(Self::Unspecified),
            "Skip" => Ok(Self::Skip),
            "BufferOne" => Ok(Self::BufferOne),
            "BufferAll" => Ok(Self::BufferAll),
            "CancelOther" => Ok(Self::CancelOther),
            "TerminateOther" => Ok(Self::TerminateOther),
            "AllowAll" => Ok(Self::AllowAll),
            other => Err(ScheduleError::UnknownOverlapPolicy(other.to_string())),
        }
    }
}

impl OverlapPolicy {
    /// Resolve an optional policy name, treating `None` like the empty
    /// string.
    pub fn resolve(name: Option<&str>) -> Result<Self> {
        name.unwrap_or_default().parse()
    }
}

/// Raw policy options as resolved by the surrounding tool.
#[derive(Debug, Clone, Default)]
pub struct PolicyOptions {
    /// Overlap-policy name; empty or unset means `Unspecified`.
    pub overlap_policy: Option<String>,
    /// Maximum span of missed time made up after an outage.
    pub catchup_window: Option<String>,
    /// Pause the schedule when the action fails.
    pub pause_on_failure: bool,
}

/// Resolved policies of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicies {
    pub overlap_policy: OverlapPolicy,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none", default)]
    pub catchup_window: Option<Duration>,
    pub pause_on_failure: bool,
}

impl SchedulePolicies {
    /// Resolve raw policy options.
    pub fn from_options(options: &PolicyOptions) -> Result<Self> {
        let overlap_policy = OverlapPolicy::resolve(options.overlap_policy.as_deref())?;
        let catchup_window = match &options.catchup_window {
            Some(raw) => Some(timefmt::parse_duration(raw)?),
            None => None,
        };
        Ok(Self {
            overlap_policy,
            catchup_window,
            pause_on_failure: options.pause_on_failure,
        })
    }
}
