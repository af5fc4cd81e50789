use crate::models::{ActivityLevel, BmiCategory, Goal, MacroRatio};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Constant term for the male branch.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Constant term for every non-male value.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (BMR -> TDEE)
// ─────────────────────────────────────────────────────────────────────────────

/// Little or no exercise.
pub const SEDENTARY_MULT: f64 = 1.2;

/// Light exercise 1-3 days/week.
pub const LIGHTLY_ACTIVE_MULT: f64 = 1.375;

/// Moderate exercise 3-5 days/week.
pub const MODERATELY_ACTIVE_MULT: f64 = 1.55;

/// Hard exercise 6-7 days/week.
pub const VERY_ACTIVE_MULT: f64 = 1.725;

/// Very hard exercise or a physical job.
pub const EXTREMELY_ACTIVE_MULT: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments and macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit for roughly 0.5 kg/week loss.
pub const WEIGHT_LOSS_ADJUSTMENT: i64 = -500;

/// Daily surplus for muscle gain.
pub const MUSCLE_GAIN_ADJUSTMENT: i64 = 300;

pub const WEIGHT_LOSS_RATIO: MacroRatio = MacroRatio {
    protein: 0.35,
    carbs: 0.35,
    fat: 0.30,
};

pub const MUSCLE_GAIN_RATIO: MacroRatio = MacroRatio {
    protein: 0.30,
    carbs: 0.50,
    fat: 0.20,
};

/// Maintenance and any unrecognised goal.
pub const DEFAULT_RATIO: MacroRatio = MacroRatio {
    protein: 0.25,
    carbs: 0.45,
    fat: 0.30,
};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (lower bounds, inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Recommendations
// ─────────────────────────────────────────────────────────────────────────────

/// Number of meal plans or workout programs returned by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Default page size when listing meal plans.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Category every goal falls back to when ranking meal plans.
pub const GENERAL_CATEGORY: &str = "general";

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_MULT,
        ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_MULT,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        ActivityLevel::ExtremelyActive => EXTREMELY_ACTIVE_MULT,
    }
}

/// Get the flat calorie adjustment for a goal.
pub fn calorie_adjustment(goal: &Goal) -> i64 {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_ADJUSTMENT,
        Goal::MuscleGain => MUSCLE_GAIN_ADJUSTMENT,
        Goal::Maintenance | Goal::Other(_) => 0,
    }
}

/// Get the macro split for a goal.
pub fn macro_ratio(goal: &Goal) -> MacroRatio {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_RATIO,
        Goal::MuscleGain => MUSCLE_GAIN_RATIO,
        Goal::Maintenance | Goal::Other(_) => DEFAULT_RATIO,
    }
}

/// Get the human-readable goal description.
pub fn goal_description(goal: &Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "weight loss",
        Goal::MuscleGain => "muscle gain",
        Goal::Maintenance => "weight maintenance",
        Goal::Other(_) => "general health",
    }
}

/// Get the BMI band for an unrounded BMI.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_ratios_sum_to_one() {
        for goal in [
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Maintenance,
            Goal::Other("anything".to_string()),
        ] {
            assert!((macro_ratio(&goal).sum() - 1.0).abs() < 1e-9, "{:?}", goal);
        }
    }

    #[test]
    fn test_every_activity_level_has_multiplier() {
        let multipliers: Vec<f64> = ActivityLevel::ALL
            .into_iter()
            .map(activity_multiplier)
            .collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_other_goal_defaults() {
        let goal = Goal::Other("general".to_string());
        assert_eq!(calorie_adjustment(&goal), 0);
        assert_eq!(macro_ratio(&goal), DEFAULT_RATIO);
        assert_eq!(goal_description(&goal), "general health");
    }
}
