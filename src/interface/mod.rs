pub mod prompts;
pub mod render;

pub use prompts::{
    complete_calorie_request, prompt_activity_level, prompt_gender, prompt_goal,
    prompt_positive_number, prompt_yes_no,
};
pub use render::{
    display_bmi, display_calorie_report, display_meal_plans, display_progress,
    display_weight_log, display_workout_recommendation, display_workout_sessions,
};
