use std::fmt;

use serde::Serialize;

use crate::models::plan::MealPlan;
use crate::models::profile::{ActivityLevel, AnthropometricInput, Gender, Goal};

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fractional split of daily calories across macronutrients.
///
/// Callers rely on `protein + carbs + fat == 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatio {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Daily amount of one macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroAmount {
    pub grams: i64,
    pub calories: i64,
    /// Share of the rounded target calories, derived from the rounded grams.
    pub percentage: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macronutrients {
    pub protein: MacroAmount,
    pub carbs: MacroAmount,
    pub fat: MacroAmount,
}

impl Macronutrients {
    /// Calories implied by the rounded gram figures.
    pub fn total_calories(&self) -> i64 {
        self.protein.calories + self.carbs.calories + self.fat.calories
    }
}

/// Result of a calorie calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieAnalysis {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub calorie_adjustment: i64,
    pub goal_description: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub macronutrients: Macronutrients,
    pub recommendations: Vec<String>,

    /// Unrounded target, used for ranking meal plans by calorie distance.
    #[serde(skip)]
    pub target_calories_exact: f64,
}

/// Echo of the validated request inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserData {
    pub fn new(input: &AnthropometricInput, activity_level: ActivityLevel, goal: &Goal) -> Self {
        Self {
            age: input.age_years,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            gender: input.gender,
            activity_level,
            goal: goal.clone(),
        }
    }
}

/// Full response of a calorie calculation: analysis, ranked plans and inputs.
#[derive(Debug, Clone, Serialize)]
pub struct CalorieReport {
    pub analysis: CalorieAnalysis,
    pub recommended_meal_plans: Vec<MealPlan>,
    pub user_data: UserData,
}
