//! Fixed-interval expression parsing.
//!
//! An interval spec is written `<period>` or `<period>/<phase>`: the
//! schedule fires every `period`, offset by `phase` from the epoch (so
//! `1h/30m` fires at half past every hour). The phase defaults to zero.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, ScheduleError};
use crate::timefmt;

/// A fixed-period firing rule with an optional phase offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Firing period. Always positive.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    /// Offset of each firing within the period. Zero when unspecified.
    #[serde(with = "humantime_serde")]
    pub phase: Duration,
}

impl IntervalSpec {
    /// Parse `<period>` or `<period>/<phase>`.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() > 2 {
            return Err(ScheduleError::InvalidInterval {
                input: input.to_string(),
                reason: "expected <period> or <period>/<phase>".to_string(),
            });
        }

        let interval = timefmt::parse_duration(parts[0]).map_err(|e| bad_interval(input, &e))?;
        if interval.is_zero() {
            return Err(ScheduleError::InvalidInterval {
                input: input.to_string(),
                reason: "period must be positive".to_string(),
            });
        }

        let phase = match parts.get(1) {
            Some(p) => timefmt::parse_duration(p).map_err(|e| bad_interval(input, &e))?,
            None => Duration::ZERO,
        };

        Ok(Self { interval, phase })
    }
}

fn bad_interval(input: &str, cause: &ScheduleError) -> ScheduleError {
    ScheduleError::InvalidInterval {
        input: input.to_string(),
        reason: cause.to_string(),
    }
}
