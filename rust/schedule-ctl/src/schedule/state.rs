//! Initial schedule state.

use serde::{Deserialize, Serialize};

/// Raw state options as resolved by the surrounding tool.
#[derive(Debug, Clone, Default)]
pub struct StateOptions {
    /// Free-text notes attached to the schedule.
    pub notes: String,
    /// Start the schedule in the paused state.
    pub paused: bool,
    /// Action budget. Setting this (even to zero) turns on limited actions.
    pub remaining_actions: Option<u64>,
}

/// Initial state carried with a new schedule definition.
///
/// `limited_actions` is true exactly when `remaining_actions` was supplied;
/// the count is meaningless otherwise and stays unset rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleState {
    pub notes: String,
    pub paused: bool,
    pub limited_actions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_actions: Option<u64>,
}

impl ScheduleState {
    /// Build the initial state from raw options. Infallible carry-through.
    pub fn from_options(options: &StateOptions) -> Self {
        Self {
            notes: options.notes.clone(),
            paused: options.paused,
            limited_actions: options.remaining_actions.is_some(),
            remaining_actions: options.remaining_actions,
        }
    }
}
