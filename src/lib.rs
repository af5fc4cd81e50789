pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use config::CoachConfig;
pub use error::{CoachError, Result};
pub use models::{CalorieAnalysis, CalorieRequest, MealPlan, WorkoutProgram};
