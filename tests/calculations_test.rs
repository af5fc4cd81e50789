use assert_float_eq::*;

use fit_coach_rs::error::CoachError;
use fit_coach_rs::models::{
    ActivityLevel, AnthropometricInput, BmiCategory, CalorieRequest, Gender, Goal,
};
use fit_coach_rs::planner::{
    analyze, classify_bmi, compute_bmi, compute_bmr, compute_macros, compute_plan,
    compute_progress, compute_tdee, macro_ratio, round_bmi,
};

fn request(gender: &str, activity: &str, goal: &str) -> CalorieRequest {
    CalorieRequest {
        age: Some(30.0),
        weight_kg: Some(90.0),
        height_cm: Some(165.0),
        gender: Some(gender.to_string()),
        activity_level: Some(activity.to_string()),
        goal: Some(goal.to_string()),
    }
}

#[test]
fn test_bmr_gender_offset() {
    for (age, weight, height) in [(25, 70.0, 170.0), (40, 55.5, 160.0), (65, 102.0, 188.0)] {
        let base = 10.0 * weight + 6.25 * height - 5.0 * age as f64;
        assert_float_absolute_eq!(compute_bmr(age, weight, height, Gender::Male), base + 5.0, 1e-9);
        assert_float_absolute_eq!(
            compute_bmr(age, weight, height, Gender::Female),
            base - 161.0,
            1e-9
        );
    }
}

#[test]
fn test_tdee_multipliers() {
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtremelyActive, 1.9),
    ];

    let person = AnthropometricInput::new(25, 70.0, 170.0, Gender::Male).unwrap();
    for (level, multiplier) in expected {
        let analysis = compute_plan(&person, level, &Goal::Maintenance).unwrap();
        let tdee = compute_tdee(1642.5, multiplier);
        assert_eq!(analysis.tdee, tdee.round() as i64, "{}", level);
        assert_eq!(analysis.target_calories, analysis.tdee);
    }
}

#[test]
fn test_end_to_end_female_weight_loss() {
    let validated = request("female", "sedentary", "weight_loss").validate().unwrap();
    let analysis = analyze(&validated).unwrap();

    assert_eq!(analysis.bmr, 1620);
    assert_eq!(analysis.tdee, 1944);
    assert_eq!(analysis.calorie_adjustment, -500);
    assert_eq!(analysis.target_calories, 1444);
    assert_float_absolute_eq!(analysis.target_calories_exact, 1444.3, 1e-9);
    assert_eq!(analysis.goal_description, "weight loss");
    assert_float_absolute_eq!(analysis.bmi, 33.1, 1e-9);
    assert_eq!(analysis.bmi_category, BmiCategory::Obese);

    let m = &analysis.macronutrients;
    assert_eq!((m.protein.grams, m.carbs.grams, m.fat.grams), (126, 126, 48));
    assert_eq!((m.protein.calories, m.carbs.calories, m.fat.calories), (504, 504, 432));
    assert_eq!(
        (m.protein.percentage, m.carbs.percentage, m.fat.percentage),
        (35, 35, 30)
    );
    assert_eq!(analysis.recommendations.len(), 5);
    assert_eq!(analysis.recommendations[0], "Eat about 1444 calories per day");
}

#[test]
fn test_macro_calories_track_target() {
    for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
        for target in [1200.0, 1444.3, 2000.0, 2845.875, 3500.5] {
            let total = compute_macros(target, &macro_ratio(&goal)).total_calories();
            assert!(
                (total as f64 - target).abs() <= 10.0,
                "{} kcal vs {} for {}",
                total,
                target,
                goal
            );
        }
    }
}

#[test]
fn test_macro_ratios_sum_to_one() {
    for goal in [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::Other("endurance".to_string()),
    ] {
        assert_float_absolute_eq!(macro_ratio(&goal).sum(), 1.0, 1e-9);
    }
}

#[test]
fn test_unknown_goal_is_general_health() {
    let analysis = analyze(&request("male", "very_active", "endurance").validate().unwrap()).unwrap();
    assert_eq!(analysis.goal_description, "general health");
    assert_eq!(analysis.calorie_adjustment, 0);
    assert_eq!(analysis.target_calories, analysis.tdee);
    assert_eq!(analysis.macronutrients.protein.percentage, 25);
}

#[test]
fn test_bmi_examples() {
    let bmi = compute_bmi(70.0, Some(175.0)).unwrap();
    assert_float_absolute_eq!(round_bmi(bmi), 22.9, 1e-9);
    assert_eq!(classify_bmi(bmi), BmiCategory::Normal);

    assert!(compute_bmi(70.0, Some(0.0)).is_none());
    assert!(compute_bmi(70.0, None).is_none());
}

#[test]
fn test_progress_examples() {
    assert_float_absolute_eq!(compute_progress(80.0, 75.0, 70.0).unwrap(), 50.0, 1e-9);
    assert_float_absolute_eq!(compute_progress(80.0, 72.0, 70.0).unwrap(), 80.0, 1e-9);
    assert!(matches!(
        compute_progress(80.0, 80.0, 80.0),
        Err(CoachError::NotApplicable(_))
    ));

    for current in [60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0] {
        let p = compute_progress(80.0, current, 70.0).unwrap();
        assert!((0.0..=100.0).contains(&p));
    }
}

#[test]
fn test_missing_fields_reported_together() {
    let err = CalorieRequest::default().validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required fields: age, weight_kg, height_cm, gender, activity_level, goal"
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let validated = request("male", "lightly_active", "muscle_gain").validate().unwrap();
    assert_eq!(analyze(&validated).unwrap(), analyze(&validated).unwrap());
}
