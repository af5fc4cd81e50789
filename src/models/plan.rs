use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything the meal plan ranker can order: a category and a calorie target.
pub trait PlanCandidate {
    fn category(&self) -> &str;
    fn target_calories(&self) -> f64;
}

/// A stored meal plan from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub category: String,

    #[serde(default)]
    pub difficulty: Option<String>,

    pub target_calories: f64,

    #[serde(default)]
    pub duration_weeks: Option<u32>,
}

impl PlanCandidate for MealPlan {
    fn category(&self) -> &str {
        &self.category
    }

    fn target_calories(&self) -> f64 {
        self.target_calories
    }
}

/// A stored workout program from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub category: String,

    pub difficulty: String,

    pub duration_weeks: u32,
}

/// Program difficulty chosen for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Program category chosen from the direction of the weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    WeightLoss,
    MuscleGain,
    Cardio,
}

impl WorkoutCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::WeightLoss => "weight_loss",
            WorkoutCategory::MuscleGain => "muscle_gain",
            WorkoutCategory::Cardio => "cardio",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a set of workout programs was recommended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutAnalysis {
    /// BMI rounded to one decimal, when height and weight are known.
    pub user_bmi: Option<f64>,
    pub difficulty: Difficulty,
    pub category: WorkoutCategory,
    pub difficulty_reason: String,
    pub category_reason: String,
    /// True when no program matched the category and only difficulty was used.
    pub used_fallback: bool,
    pub recommended_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutRecommendation {
    pub recommended_programs: Vec<WorkoutProgram>,
    pub analysis: WorkoutAnalysis,
}
