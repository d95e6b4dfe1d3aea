//! Calendar expression decoding.
//!
//! A calendar spec is a compact JSON object constraining named time fields,
//! e.g. `{"hour":"17","minute":"5"}` for 17:05 daily or
//! `{"day_of_week":"1-5","hour":"9"}` for 09:00 on weekdays. Absent fields
//! are unconstrained. Field expressions are carried verbatim; their grammar
//! is evaluated by the remote service.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A set of named field constraints decoded from a compact JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarSpec {
    /// Second (0-59).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    /// Minute (0-59).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<String>,
    /// Hour (0-23).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    /// Day of month (1-31).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<String>,
    /// Month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Day of week (0-6, Sunday = 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    /// Free-text description carried alongside the constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CalendarSpec {
    /// Decode one calendar spec from its compact JSON encoding.
    pub fn parse(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ScheduleError::InvalidCalendarSpec {
            input: input.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hour_minute() {
        let cal = CalendarSpec::parse(r#"{"hour":"17","minute":"5"}"#).unwrap();
        assert_eq!(cal.hour.as_deref(), Some("17"));
        assert_eq!(cal.minute.as_deref(), Some("5"));
        assert!(cal.day_of_week.is_none());
    }

    #[test]
    fn absent_fields_stay_unconstrained() {
        let cal = CalendarSpec::parse("{}").unwrap();
        assert_eq!(cal, CalendarSpec::default());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CalendarSpec::parse("{hour: 17}").unwrap_err();
        assert!(err.to_string().contains("{hour: 17}"));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(CalendarSpec::parse(r#"{"hours":"17"}"#).is_err());
    }

    #[test]
    fn serializes_compactly() {
        let cal = CalendarSpec {
            day_of_week: Some("1-5".to_string()),
            hour: Some("9".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&cal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"day_of_week": "1-5", "hour": "9"})
        );
    }
}
