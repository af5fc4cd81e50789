use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::planner::constants::{DEFAULT_LIST_LIMIT, DEFAULT_RECOMMENDATION_LIMIT};

/// Default log level when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Meal plan catalog (JSON or CSV).
    pub meal_catalog: PathBuf,

    /// Workout program catalog (JSON or CSV).
    pub workout_catalog: PathBuf,

    /// Weight log JSON file.
    pub weight_log: PathBuf,

    /// Workout session log JSON file.
    pub workout_log: PathBuf,

    /// Number of meal plans / programs to recommend.
    pub recommendation_limit: usize,

    /// Page size when listing meal plans.
    pub meal_plan_list_limit: usize,

    /// Page size when listing workout sessions.
    pub workout_log_list_limit: usize,

    pub log_level: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            meal_catalog: PathBuf::from("meal_plans.json"),
            workout_catalog: PathBuf::from("workout_programs.json"),
            weight_log: PathBuf::from("weight_log.json"),
            workout_log: PathBuf::from("workout_log.json"),
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            meal_plan_list_limit: DEFAULT_LIST_LIMIT,
            workout_log_list_limit: DEFAULT_LIST_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CoachConfig {
    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CoachConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.recommendation_limit == 0 {
            return Err(CoachError::InvalidInput(
                "recommendation_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"meal_catalog": "data/plans.csv", "recommendation_limit": 5}"#)
            .unwrap();

        let config = CoachConfig::load(file.path()).unwrap();
        assert_eq!(config.meal_catalog, PathBuf::from("data/plans.csv"));
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.meal_plan_list_limit, DEFAULT_LIST_LIMIT);
        assert_eq!(config.workout_log, PathBuf::from("workout_log.json"));
        assert_eq!(config.workout_log_list_limit, DEFAULT_LIST_LIMIT);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"recommendation_limit": 0}"#).unwrap();
        assert!(CoachConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = CoachConfig::load_or_default(None).unwrap();
        assert_eq!(config, CoachConfig::default());
    }
}
