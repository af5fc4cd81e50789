use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{CoachError, Result};

/// Minimum Jaro-Winkler similarity for an activity level suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Gender branch of the Mifflin-St Jeor equation.
///
/// Only the literal `"male"` selects the male branch; any other value is
/// treated as female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => {
                debug!(gender = other, "unrecognised gender, using female branch");
                Gender::Female
            }
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from(value.as_str())
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    /// Closest valid activity level name, if any is similar enough.
    pub fn suggest(input: &str) -> Option<&'static str> {
        let needle = input.trim().to_lowercase();
        Self::ALL
            .iter()
            .map(|level| (level.as_str(), jaro_winkler(level.as_str(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

impl FromStr for ActivityLevel {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| CoachError::InvalidActivityLevel {
                value: s.to_string(),
                suggestion: Self::suggest(s),
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User goal. Unknown goal strings are kept verbatim as `Other`: they are
/// not an error, and the raw value is still used as the meal plan category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
            Goal::Other(raw) => raw,
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value {
            "weight_loss" => Goal::WeightLoss,
            "muscle_gain" => Goal::MuscleGain,
            "maintenance" => Goal::Maintenance,
            other => Goal::Other(other.to_string()),
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::from(value.as_str())
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
}

impl AnthropometricInput {
    /// Build an input, rejecting zero, negative or non-finite measurements.
    pub fn new(age_years: u32, weight_kg: f64, height_cm: f64, gender: Gender) -> Result<Self> {
        if age_years == 0 {
            return Err(CoachError::InvalidInput("age must be positive".to_string()));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(CoachError::InvalidInput(format!(
                "weight_kg must be positive, got {}",
                weight_kg
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(CoachError::InvalidInput(format!(
                "height_cm must be positive, got {}",
                height_cm
            )));
        }

        Ok(Self {
            age_years,
            weight_kg,
            height_cm,
            gender,
        })
    }
}

/// Raw calorie calculation request as received from a caller.
///
/// Every field is optional on the wire; `validate` reports all of the
/// absent ones at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalorieRequest {
    pub age: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
}

/// A calorie request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub input: AnthropometricInput,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl CalorieRequest {
    /// Names of the mandatory fields that are absent, zero or blank.
    pub fn missing_fields(&self) -> Vec<String> {
        let number_missing = |v: Option<f64>| v.map(|n| n == 0.0 || n.is_nan()).unwrap_or(true);
        let text_missing =
            |v: &Option<String>| v.as_deref().map(|s| s.trim().is_empty()).unwrap_or(true);

        let checks = [
            ("age", number_missing(self.age)),
            ("weight_kg", number_missing(self.weight_kg)),
            ("height_cm", number_missing(self.height_cm)),
            ("gender", text_missing(&self.gender)),
            ("activity_level", text_missing(&self.activity_level)),
            ("goal", text_missing(&self.goal)),
        ];

        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn validate(&self) -> Result<ValidatedRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoachError::MissingField(missing));
        }

        let (Some(age), Some(weight_kg), Some(height_cm), Some(gender), Some(activity), Some(goal)) = (
            self.age,
            self.weight_kg,
            self.height_cm,
            self.gender.as_deref(),
            self.activity_level.as_deref(),
            self.goal.as_deref(),
        ) else {
            return Err(CoachError::MissingField(self.missing_fields()));
        };

        if age < 0.0 || age.fract() != 0.0 || age > u32::MAX as f64 {
            return Err(CoachError::InvalidInput(format!(
                "age must be a positive whole number, got {}",
                age
            )));
        }

        let activity_level: ActivityLevel = activity.trim().parse()?;
        let input = AnthropometricInput::new(
            age as u32,
            weight_kg,
            height_cm,
            Gender::from(gender.trim()),
        )?;

        Ok(ValidatedRequest {
            input,
            activity_level,
            goal: Goal::from(goal.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CalorieRequest {
        CalorieRequest {
            age: Some(30.0),
            weight_kg: Some(90.0),
            height_cm: Some(165.0),
            gender: Some("female".to_string()),
            activity_level: Some("sedentary".to_string()),
            goal: Some("weight_loss".to_string()),
        }
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!(
            "moderately_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert!("couch_potato".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_activity_level_suggestion() {
        match "moderatly_active".parse::<ActivityLevel>() {
            Err(CoachError::InvalidActivityLevel { suggestion, .. }) => {
                assert_eq!(suggestion, Some("moderately_active"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_activity_level_suggestion_picks_closest() {
        assert_eq!(ActivityLevel::suggest("very_activ"), Some("very_active"));
        assert_eq!(ActivityLevel::suggest("extremly_active"), Some("extremely_active"));
        assert_eq!(ActivityLevel::suggest("sedentary"), Some("sedentary"));
        assert_eq!(ActivityLevel::suggest("xyz"), None);
    }

    #[test]
    fn test_gender_non_male_is_female() {
        assert_eq!(Gender::from("male"), Gender::Male);
        assert_eq!(Gender::from("female"), Gender::Female);
        assert_eq!(Gender::from("Male"), Gender::Female);
        assert_eq!(Gender::from("unspecified"), Gender::Female);
    }

    #[test]
    fn test_goal_other_keeps_raw_value() {
        assert_eq!(Goal::from("weight_loss"), Goal::WeightLoss);
        let goal = Goal::from("endurance");
        assert_eq!(goal, Goal::Other("endurance".to_string()));
        assert_eq!(goal.as_str(), "endurance");
    }

    #[test]
    fn test_goal_serde_as_string() {
        let json = serde_json::to_string(&Goal::MuscleGain).unwrap();
        assert_eq!(json, "\"muscle_gain\"");
        let goal: Goal = serde_json::from_str("\"flexibility\"").unwrap();
        assert_eq!(goal, Goal::Other("flexibility".to_string()));
    }

    #[test]
    fn test_validate_ok() {
        let validated = full_request().validate().unwrap();
        assert_eq!(validated.input.age_years, 30);
        assert_eq!(validated.input.gender, Gender::Female);
        assert_eq!(validated.activity_level, ActivityLevel::Sedentary);
        assert_eq!(validated.goal, Goal::WeightLoss);
    }

    #[test]
    fn test_validate_reports_all_missing() {
        let mut request = full_request();
        request.age = None;
        request.goal = Some("  ".to_string());
        request.weight_kg = Some(0.0);

        match request.validate() {
            Err(CoachError::MissingField(fields)) => {
                assert_eq!(fields, vec!["age", "weight_kg", "goal"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_height() {
        let mut request = full_request();
        request.height_cm = Some(-170.0);
        assert!(matches!(
            request.validate(),
            Err(CoachError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_fractional_age() {
        let mut request = full_request();
        request.age = Some(30.5);
        assert!(matches!(
            request.validate(),
            Err(CoachError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_activity() {
        let mut request = full_request();
        request.activity_level = Some("lazy".to_string());
        assert!(matches!(
            request.validate(),
            Err(CoachError::InvalidActivityLevel { .. })
        ));
    }
}
