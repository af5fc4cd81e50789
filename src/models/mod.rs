pub mod analysis;
pub mod plan;
pub mod profile;
pub mod session;
pub mod weight;

pub use analysis::{
    BmiCategory, CalorieAnalysis, CalorieReport, MacroAmount, MacroRatio, Macronutrients, UserData,
};
pub use plan::{
    Difficulty, MealPlan, PlanCandidate, WorkoutAnalysis, WorkoutCategory, WorkoutProgram,
    WorkoutRecommendation,
};
pub use profile::{
    ActivityLevel, AnthropometricInput, CalorieRequest, Gender, Goal, ValidatedRequest,
};
pub use session::WorkoutLogEntry;
pub use weight::{parse_date, WeightEntry, WeightGoal, DATE_FORMAT};
