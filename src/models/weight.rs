use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Wire and CLI format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date, rejecting days that do not exist.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| CoachError::InvalidDate(value.to_string()))
}

/// A single body weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,

    pub weight_kg: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    /// Canonical key for upserts (one entry per date).
    pub fn key(&self) -> NaiveDate {
        self.date
    }

    /// Weight must be finite and positive.
    pub fn is_valid(&self) -> bool {
        self.weight_kg.is_finite() && self.weight_kg > 0.0
    }
}

/// An active weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightGoal {
    pub start_weight_kg: f64,
    pub target_weight_kg: f64,

    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// Planned duration; takes precedence over `target_date`.
    #[serde(default)]
    pub weeks: Option<f64>,
}

impl WeightGoal {
    /// Weeks left to reach the goal as of `today`.
    ///
    /// An explicit `weeks` wins; otherwise the distance to `target_date`.
    /// A target date in the past gives a non-positive value.
    pub fn weeks_remaining(&self, today: NaiveDate) -> Option<f64> {
        self.weeks.or_else(|| {
            self.target_date
                .map(|date| (date - today).num_days() as f64 / 7.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15").unwrap(), date(2024, 3, 15));
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_date_rejects_impossible_days() {
        for value in ["2024-02-31", "2023-02-29", "2024-04-31"] {
            assert!(
                matches!(parse_date(value), Err(CoachError::InvalidDate(_))),
                "{} accepted",
                value
            );
        }
    }

    #[test]
    fn test_entry_rejects_impossible_date_on_load() {
        let json = r#"{"date": "2024-02-31", "weight_kg": 80.0}"#;
        assert!(serde_json::from_str::<WeightEntry>(json).is_err());

        let ok: WeightEntry =
            serde_json::from_str(r#"{"date": "2024-02-29", "weight_kg": 80.0}"#).unwrap();
        assert_eq!(ok.date, date(2024, 2, 29));
    }

    #[test]
    fn test_entry_is_valid() {
        let entry = WeightEntry {
            date: date(2024, 3, 15),
            weight_kg: 80.0,
            note: None,
        };
        assert!(entry.is_valid());

        let invalid = WeightEntry {
            weight_kg: -1.0,
            ..entry
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_weeks_remaining() {
        let today = date(2024, 1, 1);
        let mut goal = WeightGoal {
            start_weight_kg: 80.0,
            target_weight_kg: 70.0,
            target_date: Some(date(2024, 3, 25)),
            weeks: None,
        };
        assert_eq!(goal.weeks_remaining(today), Some(12.0));

        goal.weeks = Some(10.0);
        assert_eq!(goal.weeks_remaining(today), Some(10.0));

        goal.weeks = None;
        goal.target_date = None;
        assert_eq!(goal.weeks_remaining(today), None);
    }
}
