mod manager;
mod persistence;

pub use manager::{PlanCatalog, WeightLog, WorkoutLog};
pub use persistence::{
    current_weight, load_meal_plans, load_weight_log, load_workout_log, load_workout_programs,
    open_weight_log, open_workout_log, save_weight_log, save_workout_log, CatalogFormat,
};
