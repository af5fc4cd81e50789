use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::parse_date;

/// Calorie, macro and plan recommendations from body measurements.
#[derive(Parser, Debug)]
#[command(name = "fit_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate BMR, TDEE, target calories and macros, and rank meal plans.
    Calories(CaloriesArgs),

    /// Calculate BMI and its category.
    Bmi {
        #[arg(long)]
        weight_kg: f64,

        #[arg(long)]
        height_cm: f64,
    },

    /// Show progress toward a weight goal.
    Progress(ProgressArgs),

    /// Record (or replace) the body weight for a date.
    LogWeight {
        #[arg(long)]
        weight_kg: f64,

        /// Date as YYYY-MM-DD (defaults to today).
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        #[arg(long)]
        note: Option<String>,

        /// Weight log file (defaults to the configured one).
        #[arg(long)]
        log: Option<PathBuf>,

        /// Replace an existing entry for the date without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// List meal plans from the catalog.
    MealPlans {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        /// Maximum number of plans, or "all".
        #[arg(long)]
        limit: Option<String>,

        /// Meal plan catalog (defaults to the configured one).
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Recommend workout programs from BMI and weight goal.
    RecommendWorkouts(RecommendWorkoutsArgs),

    /// Record one exercise of a workout session.
    LogWorkout(LogWorkoutArgs),

    /// List logged workout sessions, newest first.
    WorkoutsLog {
        /// Only sessions of this program.
        #[arg(long)]
        program_id: Option<u64>,

        /// Maximum number of sessions, or "all".
        #[arg(long)]
        limit: Option<String>,

        /// Workout log file (defaults to the configured one).
        #[arg(long)]
        log: Option<PathBuf>,

        /// Workout program catalog, used for program names.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct CaloriesArgs {
    #[arg(long)]
    pub age: Option<f64>,

    #[arg(long)]
    pub weight_kg: Option<f64>,

    #[arg(long)]
    pub height_cm: Option<f64>,

    /// "male" or "female".
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, lightly_active, moderately_active, very_active or extremely_active.
    #[arg(long)]
    pub activity_level: Option<String>,

    /// weight_loss, muscle_gain, maintenance or any other goal.
    #[arg(long)]
    pub goal: Option<String>,

    /// Meal plan catalog (defaults to the configured one).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Number of meal plans to recommend.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Fail on missing fields instead of prompting for them.
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Weight when the goal was set.
    #[arg(long)]
    pub start: f64,

    #[arg(long)]
    pub target: f64,

    /// Current weight; when omitted the latest logged weight is used.
    #[arg(long)]
    pub current: Option<f64>,

    /// Planned goal duration in weeks.
    #[arg(long, conflicts_with = "target_date")]
    pub weeks: Option<f64>,

    /// Date the target should be reached, as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date_arg)]
    pub target_date: Option<NaiveDate>,

    /// Weight log file (defaults to the configured one).
    #[arg(long)]
    pub log: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RecommendWorkoutsArgs {
    #[arg(long)]
    pub height_cm: Option<f64>,

    /// Current weight; when omitted the latest logged weight is used.
    #[arg(long)]
    pub current: Option<f64>,

    /// Goal start weight.
    #[arg(long, requires = "target")]
    pub start: Option<f64>,

    /// Goal target weight.
    #[arg(long, requires = "start")]
    pub target: Option<f64>,

    /// Workout program catalog (defaults to the configured one).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Weight log file (defaults to the configured one).
    #[arg(long)]
    pub log: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LogWorkoutArgs {
    #[arg(long)]
    pub program_id: u64,

    #[arg(long)]
    pub exercise_id: u64,

    #[arg(long)]
    pub sets: Option<u32>,

    #[arg(long)]
    pub reps: Option<u32>,

    /// Load lifted, in kg.
    #[arg(long)]
    pub weight_kg: Option<f64>,

    #[arg(long)]
    pub duration_minutes: Option<u32>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Workout date as YYYY-MM-DD (defaults to today).
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Workout log file (defaults to the configured one).
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Workout program catalog; when present the program id must exist in it.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

/// Parse a `--limit` value: a positive count or "all".
pub fn parse_limit(value: &str) -> Option<Option<usize>> {
    if value.eq_ignore_ascii_case("all") {
        return Some(None);
    }
    value.trim().parse::<usize>().ok().map(Some)
}
