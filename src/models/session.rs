use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// One logged exercise within a workout program session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub program_id: u64,

    pub exercise_id: u64,

    #[serde(default)]
    pub sets_completed: Option<u32>,

    #[serde(default)]
    pub reps_completed: Option<u32>,

    /// Load lifted, if any.
    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub duration_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub workout_date: NaiveDate,

    /// When the entry was recorded; orders sessions on the same day.
    pub logged_at: DateTime<Utc>,
}

impl WorkoutLogEntry {
    /// Program and exercise are mandatory (zero counts as absent); a load
    /// must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = [
            ("program_id", self.program_id == 0),
            ("exercise_id", self.exercise_id == 0),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| name.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(CoachError::MissingField(missing));
        }

        if let Some(w) = self.weight_kg.filter(|w| !w.is_finite() || *w < 0.0) {
            return Err(CoachError::InvalidInput(format!(
                "weight_kg must not be negative, got {}",
                w
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(program_id: u64, exercise_id: u64) -> WorkoutLogEntry {
        WorkoutLogEntry {
            program_id,
            exercise_id,
            sets_completed: Some(3),
            reps_completed: Some(10),
            weight_kg: Some(40.0),
            duration_minutes: None,
            notes: None,
            workout_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            logged_at: Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(entry(1, 2).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_ids() {
        match entry(0, 0).validate() {
            Err(CoachError::MissingField(fields)) => {
                assert_eq!(fields, vec!["program_id", "exercise_id"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_load() {
        let mut e = entry(1, 2);
        e.weight_kg = Some(-5.0);
        assert!(matches!(e.validate(), Err(CoachError::InvalidInput(_))));
    }

    #[test]
    fn test_serde_dates() {
        let json = serde_json::to_value(entry(1, 2)).unwrap();
        assert_eq!(json["workout_date"], "2024-05-01");

        let bad = r#"{"program_id": 1, "exercise_id": 2, "workout_date": "2024-04-31",
                      "logged_at": "2024-05-01T18:30:00Z"}"#;
        assert!(serde_json::from_str::<WorkoutLogEntry>(bad).is_err());
    }
}
