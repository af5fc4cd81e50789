use std::cmp::Ordering;

use tracing::debug;

use crate::models::{
    Difficulty, PlanCandidate, WeightGoal, WorkoutAnalysis, WorkoutCategory, WorkoutProgram,
    WorkoutRecommendation,
};
use crate::planner::calculations::round_bmi;
use crate::planner::constants::{BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN, GENERAL_CATEGORY};

/// Rank candidates for a category and calorie target.
///
/// Keeps exact category matches and `general` plans, orders exact matches
/// first and then by ascending calorie distance, and truncates to `limit`.
/// The sort is stable: ties keep catalog order. No fallback happens here;
/// an empty result is the caller's to handle.
pub fn rank_plans<'a, P: PlanCandidate>(
    candidates: &'a [P],
    target_category: &str,
    target_calories: f64,
    limit: usize,
) -> Vec<&'a P> {
    let mut ranked: Vec<(u8, f64, &P)> = candidates
        .iter()
        .filter_map(|plan| {
            let tier = if plan.category() == target_category {
                0
            } else if plan.category() == GENERAL_CATEGORY {
                1
            } else {
                return None;
            };
            let distance = (plan.target_calories() - target_calories).abs();
            Some((tier, distance, plan))
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, _, plan)| plan)
        .collect()
}

/// Choose a program difficulty from BMI.
///
/// Unknown BMI and BMI >= 30 start at beginner; everyone else gets
/// intermediate.
pub fn workout_difficulty(bmi: Option<f64>) -> Difficulty {
    match bmi {
        Some(bmi) if bmi < BMI_OBESE_MIN => Difficulty::Intermediate,
        _ => Difficulty::Beginner,
    }
}

/// Choose a program category from the direction of the weight goal.
///
/// `current_weight_kg` is the latest logged weight; without one the goal's
/// start weight is used. No goal means weight loss.
pub fn workout_category(goal: Option<&WeightGoal>, current_weight_kg: Option<f64>) -> WorkoutCategory {
    let Some(goal) = goal else {
        return WorkoutCategory::WeightLoss;
    };

    let current = current_weight_kg.unwrap_or(goal.start_weight_kg);
    match goal.target_weight_kg.partial_cmp(&current) {
        Some(Ordering::Less) => WorkoutCategory::WeightLoss,
        Some(Ordering::Greater) => WorkoutCategory::MuscleGain,
        _ => WorkoutCategory::Cardio,
    }
}

fn difficulty_reason(bmi: Option<f64>) -> &'static str {
    match bmi {
        None => "BMI could not be calculated",
        Some(bmi) if bmi >= BMI_OBESE_MIN => "BMI is well above normal; start with a light program",
        Some(bmi) if bmi >= BMI_OVERWEIGHT_MIN => {
            "BMI is slightly above normal; use a moderate program"
        }
        Some(_) => "BMI is normal; use a moderate program",
    }
}

fn category_reason(has_goal: bool, category: WorkoutCategory) -> &'static str {
    if !has_goal {
        return "no clear goal set";
    }
    match category {
        WorkoutCategory::WeightLoss => "goal is to lose weight",
        WorkoutCategory::MuscleGain => "goal is to build muscle",
        WorkoutCategory::Cardio => "goal is to maintain weight",
    }
}

/// Programs with the given difficulty (and category, when given), shortest first.
pub fn select_programs<'a>(
    programs: &'a [WorkoutProgram],
    difficulty: Difficulty,
    category: Option<WorkoutCategory>,
    limit: usize,
) -> Vec<&'a WorkoutProgram> {
    let mut selected: Vec<&WorkoutProgram> = programs
        .iter()
        .filter(|p| p.difficulty == difficulty.as_str())
        .filter(|p| category.is_none_or(|c| p.category == c.as_str()))
        .collect();

    selected.sort_by_key(|p| p.duration_weeks);
    selected.truncate(limit);
    selected
}

/// Recommend workout programs for a user.
///
/// Matches difficulty and category first; when nothing matches, retries
/// with difficulty alone.
pub fn recommend_workouts(
    programs: &[WorkoutProgram],
    bmi: Option<f64>,
    goal: Option<&WeightGoal>,
    current_weight_kg: Option<f64>,
    limit: usize,
) -> WorkoutRecommendation {
    let difficulty = workout_difficulty(bmi);
    let category = workout_category(goal, current_weight_kg);

    let mut selected = select_programs(programs, difficulty, Some(category), limit);
    let used_fallback = selected.is_empty();
    if used_fallback {
        debug!(
            difficulty = difficulty.as_str(),
            category = category.as_str(),
            "no program matches category, falling back to difficulty only"
        );
        selected = select_programs(programs, difficulty, None, limit);
    }

    let recommended_programs: Vec<WorkoutProgram> = selected.into_iter().cloned().collect();

    WorkoutRecommendation {
        analysis: WorkoutAnalysis {
            user_bmi: bmi.map(round_bmi),
            difficulty,
            category,
            difficulty_reason: difficulty_reason(bmi).to_string(),
            category_reason: category_reason(goal.is_some(), category).to_string(),
            used_fallback,
            recommended_count: recommended_programs.len(),
        },
        recommended_programs,
    }
}
