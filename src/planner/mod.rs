pub mod calculations;
pub mod constants;
pub mod energy;
pub mod progress;
pub mod ranking;

pub use calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_tdee, round_bmi, round_half_up,
};
pub use constants::*;
pub use energy::{analyze, compute_macros, compute_plan, recommendation_lines};
pub use progress::{compute_progress, weekly_target_rate};
pub use ranking::{rank_plans, recommend_workouts, select_programs, workout_category, workout_difficulty};
