//! Full schedule definitions.
//!
//! A [`Schedule`] is the complete, replaceable definition the service
//! stores: timing spec, triggered action, policies, and initial state. It
//! is rebuilt from options for every create or update; update is a full
//! replace, never a merge.

pub mod action;
pub mod policy;
pub mod state;

pub use action::{ActionOptions, ScheduleAction, StartJobAction};
pub use policy::{OverlapPolicy, PolicyOptions, SchedulePolicies};
pub use state::{ScheduleState, StateOptions};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spec::{ScheduleSpec, SpecOptions};

/// Every option consumed by the schedule assembler, grouped by component.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptions {
    pub spec: SpecOptions,
    pub action: ActionOptions,
    pub policies: PolicyOptions,
    pub state: StateOptions,
}

/// The full definition of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub spec: ScheduleSpec,
    pub action: ScheduleAction,
    pub policies: SchedulePolicies,
    pub state: ScheduleState,
}

impl Schedule {
    /// Assemble a schedule from raw options against a reference `now`.
    ///
    /// Components assemble in spec, action, policies, state order and the
    /// first failure aborts the whole build; no partial schedule is ever
    /// returned.
    pub fn from_options(options: &ScheduleOptions, now: DateTime<Utc>) -> Result<Self> {
        let spec = ScheduleSpec::from_options(&options.spec, now)?;
        let action = ScheduleAction::from_options(&options.action)?;
        let policies = SchedulePolicies::from_options(&options.policies)?;
        let state = ScheduleState::from_options(&options.state);
        Ok(Self {
            spec,
            action,
            policies,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn assembles_end_to_end() {
        let options = ScheduleOptions {
            spec: SpecOptions {
                calendars: vec![r#"{"hour":"17","minute":"5"}"#.to_string()],
                ..Default::default()
            },
            policies: PolicyOptions {
                overlap_policy: Some("Skip".to_string()),
                ..Default::default()
            },
            state: StateOptions {
                remaining_actions: Some(10),
                ..Default::default()
            },
            action: ActionOptions {
                job_type: "GenerateReport".to_string(),
                task_queue: "reports".to_string(),
                ..Default::default()
            },
        };

        let schedule = Schedule::from_options(&options, now()).unwrap();
        assert_eq!(schedule.spec.calendars.len(), 1);
        assert!(schedule.spec.intervals.is_empty());
        assert_eq!(schedule.policies.overlap_policy, OverlapPolicy::Skip);
        assert!(schedule.state.limited_actions);
        assert_eq!(schedule.state.remaining_actions, Some(10));
    }

    #[test]
    fn first_component_error_wins() {
        let options = ScheduleOptions {
            spec: SpecOptions {
                intervals: vec!["not-a-duration".to_string()],
                ..Default::default()
            },
            policies: PolicyOptions {
                overlap_policy: Some("also-bad".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Schedule::from_options(&options, now()).unwrap_err();
        assert!(err.to_string().contains("not-a-duration"));
    }
}
