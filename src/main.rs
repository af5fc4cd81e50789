use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use tracing::{info, warn};

use fit_coach_rs::cli::{
    parse_limit, CaloriesArgs, Cli, Command, LogWorkoutArgs, ProgressArgs, RecommendWorkoutsArgs,
};
use fit_coach_rs::config::CoachConfig;
use fit_coach_rs::error::{CoachError, Result};
use fit_coach_rs::interface::{
    complete_calorie_request, display_bmi, display_calorie_report, display_meal_plans,
    display_progress, display_weight_log, display_workout_recommendation,
    display_workout_sessions, prompt_yes_no,
};
use fit_coach_rs::logging;
use fit_coach_rs::models::{
    CalorieReport, CalorieRequest, UserData, WeightEntry, WeightGoal, WorkoutLogEntry,
};
use fit_coach_rs::planner::{
    analyze, classify_bmi, compute_bmi, compute_progress, recommend_workouts, round_bmi,
    weekly_target_rate,
};
use fit_coach_rs::state::{
    current_weight, load_meal_plans, load_workout_programs, open_weight_log, open_workout_log,
    save_weight_log, save_workout_log, PlanCatalog,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CoachConfig::load_or_default(cli.config.as_deref())?;
    logging::init(logging::effective_level(&config.log_level, cli.verbose));

    match cli.command {
        Command::Calories(args) => cmd_calories(&config, args),
        Command::Bmi {
            weight_kg,
            height_cm,
        } => cmd_bmi(weight_kg, height_cm),
        Command::Progress(args) => cmd_progress(&config, args),
        Command::LogWeight {
            weight_kg,
            date,
            note,
            log,
            yes,
        } => cmd_log_weight(&config, weight_kg, date, note, log, yes),
        Command::MealPlans {
            category,
            difficulty,
            limit,
            catalog,
        } => cmd_meal_plans(&config, category, difficulty, limit, catalog),
        Command::RecommendWorkouts(args) => cmd_recommend_workouts(&config, args),
        Command::LogWorkout(args) => cmd_log_workout(&config, args),
        Command::WorkoutsLog {
            program_id,
            limit,
            log,
            catalog,
        } => cmd_workouts_log(&config, program_id, limit, log, catalog),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_limit(raw: Option<String>, default: usize) -> Result<Option<usize>> {
    match raw {
        Some(raw) => parse_limit(&raw)
            .ok_or_else(|| CoachError::InvalidInput(format!("invalid limit '{}'", raw))),
        None => Ok(Some(default)),
    }
}

/// Workout programs from `path`, or an empty catalog if the file is absent.
fn open_workout_catalog(path: &Path) -> Result<PlanCatalog> {
    if !path.exists() {
        info!(path = %path.display(), "workout catalog not found");
        return Ok(PlanCatalog::default());
    }
    Ok(PlanCatalog::new(Vec::new(), load_workout_programs(path)?))
}

/// Calculate calories and macros, then rank meal plans for the goal.
fn cmd_calories(config: &CoachConfig, args: CaloriesArgs) -> Result<()> {
    let mut request = CalorieRequest {
        age: args.age,
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        gender: args.gender,
        activity_level: args.activity_level,
        goal: args.goal,
    };

    if !args.no_prompt && !request.missing_fields().is_empty() {
        request = complete_calorie_request(request)?;
    }

    let validated = request.validate()?;
    let analysis = analyze(&validated)?;

    let catalog_path = args.catalog.unwrap_or_else(|| config.meal_catalog.clone());
    let meal_plans = if catalog_path.exists() {
        load_meal_plans(&catalog_path)?
    } else {
        warn!(path = %catalog_path.display(), "meal plan catalog not found, no plans to rank");
        Vec::new()
    };
    let catalog = PlanCatalog::new(meal_plans, Vec::new());

    let limit = args.limit.unwrap_or(config.recommendation_limit);
    let recommended_meal_plans =
        catalog.recommend_meal_plans(&analysis, validated.goal.as_str(), limit);

    let report = CalorieReport {
        user_data: UserData::new(&validated.input, validated.activity_level, &validated.goal),
        analysis,
        recommended_meal_plans,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_calorie_report(&report);
    }

    Ok(())
}

/// Calculate BMI and its category.
fn cmd_bmi(weight_kg: f64, height_cm: f64) -> Result<()> {
    let bmi = compute_bmi(weight_kg, Some(height_cm)).map(|b| (round_bmi(b), classify_bmi(b)));
    display_bmi(bmi);
    Ok(())
}

/// Show progress toward a weight goal.
fn cmd_progress(config: &CoachConfig, args: ProgressArgs) -> Result<()> {
    // The log is only read when no current weight was given.
    let log = match args.current {
        Some(_) => None,
        None => {
            let log_path = args.log.unwrap_or_else(|| config.weight_log.clone());
            Some(open_weight_log(&log_path)?)
        }
    };

    let current = args
        .current
        .or_else(|| log.as_ref().and_then(|l| l.latest()).map(|e| e.weight_kg))
        .ok_or_else(|| {
            CoachError::InvalidInput(
                "no current weight: pass --current or log a weight first".to_string(),
            )
        })?;

    let progress = match compute_progress(args.start, current, args.target) {
        Ok(p) => Some(p),
        Err(CoachError::NotApplicable(reason)) => {
            info!(%reason, "progress not applicable");
            None
        }
        Err(e) => return Err(e),
    };

    let goal = WeightGoal {
        start_weight_kg: args.start,
        target_weight_kg: args.target,
        target_date: args.target_date,
        weeks: args.weeks,
    };
    let weekly_rate = weekly_target_rate(
        goal.start_weight_kg,
        goal.target_weight_kg,
        goal.weeks_remaining(today()),
    );

    display_progress(progress, current, goal.target_weight_kg, weekly_rate);
    if let Some(log) = log.filter(|l| !l.is_empty()) {
        display_weight_log(&log);
    }

    Ok(())
}

/// Record the weight for a date, replacing any existing entry.
fn cmd_log_weight(
    config: &CoachConfig,
    weight_kg: f64,
    date: Option<NaiveDate>,
    note: Option<String>,
    log_path: Option<PathBuf>,
    assume_yes: bool,
) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let path = log_path.unwrap_or_else(|| config.weight_log.clone());
    let mut log = open_weight_log(&path)?;

    if let Some(existing) = log.get(date) {
        let prompt = format!(
            "Replace {:.1} kg already logged for {}?",
            existing.weight_kg, date
        );
        if !assume_yes && !prompt_yes_no(&prompt, true)? {
            println!("Weight log unchanged.");
            return Ok(());
        }
    }

    log.upsert(WeightEntry {
        date,
        weight_kg,
        note,
    })?;

    save_weight_log(&path, log.entries())?;
    println!("Weight log saved to {}.", path.display());
    display_weight_log(&log);

    Ok(())
}

/// List catalog meal plans.
fn cmd_meal_plans(
    config: &CoachConfig,
    category: Option<String>,
    difficulty: Option<String>,
    limit: Option<String>,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    let limit = resolve_limit(limit, config.meal_plan_list_limit)?;

    let path = catalog_path.unwrap_or_else(|| config.meal_catalog.clone());
    let catalog = PlanCatalog::new(load_meal_plans(&path)?, Vec::new());

    let plans = catalog.list_meal_plans(category.as_deref(), difficulty.as_deref(), limit);
    display_meal_plans(plans, "Meal Plans");

    Ok(())
}

/// Recommend workout programs from BMI and weight goal.
fn cmd_recommend_workouts(config: &CoachConfig, args: RecommendWorkoutsArgs) -> Result<()> {
    let catalog_path = args
        .catalog
        .unwrap_or_else(|| config.workout_catalog.clone());
    let catalog = PlanCatalog::new(Vec::new(), load_workout_programs(&catalog_path)?);
    if catalog.is_empty() {
        warn!(path = %catalog_path.display(), "workout catalog is empty");
    }

    let log_path = args.log.unwrap_or_else(|| config.weight_log.clone());
    let current = current_weight(args.current, &log_path)?;

    let goal = match (args.start, args.target) {
        (Some(start), Some(target)) => Some(WeightGoal {
            start_weight_kg: start,
            target_weight_kg: target,
            target_date: None,
            weeks: None,
        }),
        _ => None,
    };

    let bmi = current.and_then(|w| compute_bmi(w, args.height_cm));

    let recommendation = recommend_workouts(
        catalog.workout_programs(),
        bmi,
        goal.as_ref(),
        current,
        config.recommendation_limit,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        display_workout_recommendation(&recommendation);
    }

    Ok(())
}

/// Record one exercise of a workout session.
fn cmd_log_workout(config: &CoachConfig, args: LogWorkoutArgs) -> Result<()> {
    let catalog_path = args
        .catalog
        .unwrap_or_else(|| config.workout_catalog.clone());
    let catalog = open_workout_catalog(&catalog_path)?;

    catalog.ensure_workout_program(args.program_id)?;

    let log_path = args.log.unwrap_or_else(|| config.workout_log.clone());
    let mut log = open_workout_log(&log_path)?;

    let entry = WorkoutLogEntry {
        program_id: args.program_id,
        exercise_id: args.exercise_id,
        sets_completed: args.sets,
        reps_completed: args.reps,
        weight_kg: args.weight_kg,
        duration_minutes: args.duration_minutes,
        notes: args.notes,
        workout_date: args.date.unwrap_or_else(today),
        logged_at: Utc::now(),
    };
    log.record(entry)?;

    save_workout_log(&log_path, log.entries())?;
    println!("Workout log saved to {}.", log_path.display());
    display_workout_sessions(log.entries().last(), &catalog);

    Ok(())
}

/// List logged workout sessions, newest first.
fn cmd_workouts_log(
    config: &CoachConfig,
    program_id: Option<u64>,
    limit: Option<String>,
    log_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    let limit = resolve_limit(limit, config.workout_log_list_limit)?;

    let log_path = log_path.unwrap_or_else(|| config.workout_log.clone());
    let log = open_workout_log(&log_path)?;
    if log.is_empty() {
        println!("No workouts logged yet in {}.", log_path.display());
        return Ok(());
    }

    let catalog_path = catalog_path.unwrap_or_else(|| config.workout_catalog.clone());
    let catalog = open_workout_catalog(&catalog_path)?;

    display_workout_sessions(log.recent(program_id, limit), &catalog);

    Ok(())
}
