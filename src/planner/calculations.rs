use crate::models::{BmiCategory, Gender};
use crate::planner::constants::*;

/// Round half up (toward positive infinity), so `-2.5` becomes `-2`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to a number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}

/// Round half up to an integer.
#[inline]
pub fn round_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Calculate BMI from weight and height.
///
/// Returns the unrounded value, or `None` when height is absent or not
/// positive. Use `round_bmi` for display.
pub fn compute_bmi(weight_kg: f64, height_cm: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| *h > 0.0)?;
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// BMI rounded to one decimal place.
pub fn round_bmi(bmi: f64) -> f64 {
    round_to(bmi, 1)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// No validation happens here; callers reject bad measurements first.
pub fn compute_bmr(age_years: u32, weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age_years as f64;

    match gender {
        Gender::Male => base + BMR_MALE_OFFSET,
        Gender::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Classify an unrounded BMI.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    bmi_category(bmi)
}

/// Total daily energy expenditure: BMR scaled by an activity multiplier.
pub fn compute_tdee(bmr: f64, multiplier: f64) -> f64 {
    bmr * multiplier
}
