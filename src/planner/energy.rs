use crate::error::{CoachError, Result};
use crate::models::{
    ActivityLevel, AnthropometricInput, CalorieAnalysis, Goal, MacroAmount, MacroRatio,
    Macronutrients, ValidatedRequest,
};
use crate::planner::calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_tdee, round_bmi, round_i64,
};
use crate::planner::constants::*;

/// Convert one macro share of the target into grams, calories and percentage.
///
/// Calories and percentage come from the rounded grams, so the displayed
/// figures stay consistent with each other.
fn macro_amount(
    target_calories: f64,
    rounded_target: i64,
    ratio: f64,
    kcal_per_gram: f64,
) -> MacroAmount {
    let grams = round_i64(target_calories * ratio / kcal_per_gram);
    let calories = round_i64(grams as f64 * kcal_per_gram);
    let percentage = if rounded_target > 0 {
        round_i64(calories as f64 / rounded_target as f64 * 100.0)
    } else {
        0
    };

    MacroAmount {
        grams,
        calories,
        percentage,
    }
}

/// Split a calorie target into macronutrient amounts.
pub fn compute_macros(target_calories: f64, ratio: &MacroRatio) -> Macronutrients {
    let rounded_target = round_i64(target_calories);

    Macronutrients {
        protein: macro_amount(target_calories, rounded_target, ratio.protein, KCAL_PER_GRAM_PROTEIN),
        carbs: macro_amount(target_calories, rounded_target, ratio.carbs, KCAL_PER_GRAM_CARBS),
        fat: macro_amount(target_calories, rounded_target, ratio.fat, KCAL_PER_GRAM_FAT),
    }
}

/// Human-readable summary lines for an analysis.
pub fn recommendation_lines(analysis: &CalorieAnalysis) -> Vec<String> {
    let m = &analysis.macronutrients;
    vec![
        format!("Eat about {} calories per day", analysis.target_calories),
        format!("Protein {}g ({}%)", m.protein.grams, m.protein.percentage),
        format!("Carbohydrates {}g ({}%)", m.carbs.grams, m.carbs.percentage),
        format!("Fat {}g ({}%)", m.fat.grams, m.fat.percentage),
        format!("Body mass index (BMI): {} ({})", analysis.bmi, analysis.bmi_category),
    ]
}

/// Compute the full calorie and macro analysis for one person.
///
/// Pure and deterministic. Fails only if the height cannot produce a BMI,
/// which `AnthropometricInput::new` already rules out.
pub fn compute_plan(
    input: &AnthropometricInput,
    activity_level: ActivityLevel,
    goal: &Goal,
) -> Result<CalorieAnalysis> {
    let bmr = compute_bmr(input.age_years, input.weight_kg, input.height_cm, input.gender);
    let tdee = compute_tdee(bmr, activity_multiplier(activity_level));

    let adjustment = calorie_adjustment(goal);
    let target_calories = tdee + adjustment as f64;

    let ratio = macro_ratio(goal);
    let macronutrients = compute_macros(target_calories, &ratio);

    let bmi = compute_bmi(input.weight_kg, Some(input.height_cm)).ok_or_else(|| {
        CoachError::NotComputable(format!("BMI for height_cm {}", input.height_cm))
    })?;

    let mut analysis = CalorieAnalysis {
        bmr: round_i64(bmr),
        tdee: round_i64(tdee),
        target_calories: round_i64(target_calories),
        calorie_adjustment: adjustment,
        goal_description: goal_description(goal).to_string(),
        bmi: round_bmi(bmi),
        bmi_category: classify_bmi(bmi),
        macronutrients,
        recommendations: Vec::new(),
        target_calories_exact: target_calories,
    };
    analysis.recommendations = recommendation_lines(&analysis);

    Ok(analysis)
}

/// Compute the analysis for a request that already passed validation.
pub fn analyze(request: &ValidatedRequest) -> Result<CalorieAnalysis> {
    compute_plan(&request.input, request.activity_level, &request.goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BmiCategory, Gender};

    fn input(age: u32, weight: f64, height: f64, gender: Gender) -> AnthropometricInput {
        AnthropometricInput::new(age, weight, height, gender).unwrap()
    }

    #[test]
    fn test_goal_adjustments() {
        let person = input(25, 70.0, 170.0, Gender::Male);
        let activity = ActivityLevel::ModeratelyActive;

        let loss = compute_plan(&person, activity, &Goal::WeightLoss).unwrap();
        let gain = compute_plan(&person, activity, &Goal::MuscleGain).unwrap();
        let keep = compute_plan(&person, activity, &Goal::Maintenance).unwrap();

        assert!((loss.target_calories_exact - 2045.875).abs() < 1e-9);
        assert!((gain.target_calories_exact - 2845.875).abs() < 1e-9);
        assert!((keep.target_calories_exact - 2545.875).abs() < 1e-9);
        assert_eq!(loss.calorie_adjustment, -500);
        assert_eq!(gain.calorie_adjustment, 300);
        assert_eq!(keep.calorie_adjustment, 0);
        assert_eq!(keep.bmr, 1643);
        assert_eq!(keep.tdee, 2546);
        assert_eq!(keep.target_calories, 2546);
    }

    #[test]
    fn test_macros_weight_loss() {
        let macros = compute_macros(1444.3, &WEIGHT_LOSS_RATIO);
        // 1444.3 * 0.35 / 4 = 126.38; 1444.3 * 0.30 / 9 = 48.14
        assert_eq!(macros.protein.grams, 126);
        assert_eq!(macros.carbs.grams, 126);
        assert_eq!(macros.fat.grams, 48);
        assert_eq!(macros.protein.calories, 504);
        assert_eq!(macros.fat.calories, 432);
        assert_eq!(macros.protein.percentage, 35);
        assert_eq!(macros.fat.percentage, 30);
    }

    #[test]
    fn test_macro_calories_approximate_target() {
        let person = input(41, 82.0, 181.0, Gender::Male);
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
            let analysis = compute_plan(&person, ActivityLevel::VeryActive, &goal).unwrap();
            let diff = (analysis.macronutrients.total_calories() - analysis.target_calories).abs();
            assert!(diff <= 10, "{:?}: off by {} kcal", goal, diff);
        }
    }

    #[test]
    fn test_other_goal_is_general_health() {
        let person = input(25, 70.0, 170.0, Gender::Male);
        let analysis =
            compute_plan(&person, ActivityLevel::Sedentary, &Goal::from("flexibility")).unwrap();
        assert_eq!(analysis.calorie_adjustment, 0);
        assert_eq!(analysis.goal_description, "general health");
        assert_eq!(analysis.macronutrients.protein.percentage, 25);
    }

    #[test]
    fn test_recommendation_lines() {
        let person = input(30, 90.0, 165.0, Gender::Female);
        let analysis = compute_plan(&person, ActivityLevel::Sedentary, &Goal::WeightLoss).unwrap();
        assert_eq!(analysis.recommendations.len(), 5);
        assert_eq!(analysis.recommendations[0], "Eat about 1444 calories per day");
        assert_eq!(analysis.recommendations[4], "Body mass index (BMI): 33.1 (obese)");
        assert_eq!(analysis.bmi_category, BmiCategory::Obese);
    }

    #[test]
    fn test_compute_plan_is_deterministic() {
        let person = input(52, 64.5, 158.0, Gender::Female);
        let a = compute_plan(&person, ActivityLevel::LightlyActive, &Goal::MuscleGain).unwrap();
        let b = compute_plan(&person, ActivityLevel::LightlyActive, &Goal::MuscleGain).unwrap();
        assert_eq!(a, b);
    }
}
