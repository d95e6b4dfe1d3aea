//! Human time and duration parsing.
//!
//! Durations use the humantime grammar (`90s`, `10m`, `1h 30m`, `2d`).
//! Absolute times accept RFC 3339, bare unix seconds, the literal `now`,
//! and relative offsets (`+1h`, `-30m`) applied to a caller-supplied
//! reference instant. Parsing is deterministic for a given `(input, now)`
//! pair and never defaults silently on malformed non-empty input.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::error::{Result, ScheduleError};

/// Parse a human duration string such as `90s`, `45m`, or `1h 30m`.
pub fn parse_duration(input: &str) -> Result<Duration> {
    if input.is_empty() {
        return Err(ScheduleError::InvalidDuration {
            input: input.to_string(),
            reason: "empty duration string".to_string(),
        });
    }
    humantime::parse_duration(input).map_err(|e| ScheduleError::InvalidDuration {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parse an absolute or relative time string against a reference `now`.
pub fn parse_time(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if input.is_empty() {
        return Err(ScheduleError::InvalidTime {
            input: input.to_string(),
            reason: "empty time string".to_string(),
        });
    }

    if input == "now" {
        return Ok(now);
    }

    // Relative offset from now.
    if let Some(rest) = input.strip_prefix('+') {
        let offset = offset_duration(input, rest)?;
        return now
            .checked_add_signed(offset)
            .ok_or_else(|| out_of_range(input));
    }
    if let Some(rest) = input.strip_prefix('-') {
        let offset = offset_duration(input, rest)?;
        return now
            .checked_sub_signed(offset)
            .ok_or_else(|| out_of_range(input));
    }

    // Bare unix seconds.
    if input.bytes().all(|b| b.is_ascii_digit()) {
        let secs: i64 = input.parse().map_err(|_| out_of_range(input))?;
        return DateTime::from_timestamp(secs, 0).ok_or_else(|| out_of_range(input));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ScheduleError::InvalidTime {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

fn offset_duration(input: &str, rest: &str) -> Result<chrono::Duration> {
    let std = humantime::parse_duration(rest.trim()).map_err(|e| ScheduleError::InvalidTime {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    chrono::Duration::from_std(std).map_err(|_| out_of_range(input))
}

fn out_of_range(input: &str) -> ScheduleError {
    ScheduleError::InvalidTime {
        input: input.to_string(),
        reason: "value out of range".to_string(),
    }
}
