//! Schedule timing specification.
//!
//! A [`ScheduleSpec`] combines calendar alternatives, interval alternatives,
//! an optional validity window, jitter, and an IANA timezone name. The
//! schedule fires when ANY calendar or interval rule matches. A spec with no
//! calendars and no intervals never fires on its own and only responds to
//! manual triggers.

pub mod calendar;
pub mod interval;

pub use calendar::CalendarSpec;
pub use interval::IntervalSpec;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, ScheduleError};
use crate::timefmt;

/// Raw, unparsed spec options as resolved by the surrounding tool.
///
/// Every field distinguishes "not provided" from "provided as the zero
/// value": unset options stay `None` and are omitted from the assembled
/// spec entirely.
#[derive(Debug, Clone, Default)]
pub struct SpecOptions {
    /// Compact JSON calendar expressions, one per flag occurrence.
    pub calendars: Vec<String>,
    /// `<period>[/<phase>]` interval expressions, one per flag occurrence.
    pub intervals: Vec<String>,
    /// Start of the validity window.
    pub start_time: Option<String>,
    /// End of the validity window.
    pub end_time: Option<String>,
    /// Maximum random delay added to each firing.
    pub jitter: Option<String>,
    /// IANA timezone name, carried to the service as-is.
    pub time_zone: Option<String>,
}

/// The timing rules of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Calendar-based firing rules, OR'd together and with `intervals`.
    pub calendars: Vec<CalendarSpec>,
    /// Fixed-interval firing rules.
    pub intervals: Vec<IntervalSpec>,
    /// Inclusive start of the validity window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Inclusive end of the validity window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Maximum random delay added to each firing.
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none", default)]
    pub jitter: Option<Duration>,
    /// IANA timezone name. Not validated locally; the service owns tzdb
    /// lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl ScheduleSpec {
    /// Assemble a spec from raw options against a reference `now`.
    ///
    /// Fails on the first malformed entry; no partially assembled spec is
    /// ever returned.
    pub fn from_options(options: &SpecOptions, now: DateTime<Utc>) -> Result<Self> {
        let mut spec = Self::default();

        for raw in &options.calendars {
            spec.calendars.push(CalendarSpec::parse(raw)?);
        }
        for raw in &options.intervals {
            spec.intervals.push(IntervalSpec::parse(raw)?);
        }
        // An empty window bound means "use the default", i.e. stay unset.
        if let Some(raw) = options.start_time.as_deref().filter(|s| !s.is_empty()) {
            spec.start_time = Some(timefmt::parse_time(raw, now)?);
        }
        if let Some(raw) = options.end_time.as_deref().filter(|s| !s.is_empty()) {
            spec.end_time = Some(timefmt::parse_time(raw, now)?);
        }
        if let (Some(start), Some(end)) = (spec.start_time, spec.end_time) {
            if start > end {
                return Err(ScheduleError::InvertedWindow { start, end });
            }
        }
        if let Some(raw) = &options.jitter {
            spec.jitter = Some(timefmt::parse_duration(raw)?);
        }
        spec.time_zone.clone_from(&options.time_zone);

        Ok(spec)
    }
}
