use crate::error::{CoachError, Result};
use crate::planner::calculations::round_to;

/// Percentage of a weight goal achieved, clamped to [0, 100].
///
/// Works for both loss and gain goals since the sign of the achieved change
/// and the total change cancel. Returns `NotApplicable` when start equals
/// target.
pub fn compute_progress(start_weight_kg: f64, current_weight_kg: f64, target_weight_kg: f64) -> Result<f64> {
    let total_to_change = start_weight_kg - target_weight_kg;
    if total_to_change == 0.0 {
        return Err(CoachError::NotApplicable(
            "start weight equals target weight".to_string(),
        ));
    }

    let achieved = start_weight_kg - current_weight_kg;
    Ok((achieved / total_to_change * 100.0).clamp(0.0, 100.0))
}

/// Kilograms per week needed to reach the target, rounded to 2 decimals.
///
/// `None` when no positive duration is given.
pub fn weekly_target_rate(start_weight_kg: f64, target_weight_kg: f64, weeks: Option<f64>) -> Option<f64> {
    let weeks = weeks.filter(|w| *w > 0.0)?;
    Some(round_to((start_weight_kg - target_weight_kg) / weeks, 2))
}
