use crate::models::{
    BmiCategory, CalorieReport, MacroAmount, MealPlan, WorkoutLogEntry, WorkoutRecommendation,
};
use crate::state::{PlanCatalog, WeightLog};

fn macro_row(label: &str, amount: &MacroAmount) -> String {
    format!(
        "  {:<14} {:>5} g  {:>5} kcal  {:>3}%",
        label, amount.grams, amount.calories, amount.percentage
    )
}

fn plan_row(plan: &MealPlan) -> String {
    let weeks = plan
        .duration_weeks
        .map(|w| format!(", {} weeks", w))
        .unwrap_or_default();
    let difficulty = plan
        .difficulty
        .as_deref()
        .map(|d| format!(", {}", d))
        .unwrap_or_default();
    format!(
        "  #{} {} [{}] - {:.0} kcal{}{}",
        plan.id, plan.name, plan.category, plan.target_calories, difficulty, weeks
    )
}

fn session_row(entry: &WorkoutLogEntry, program_name: Option<&str>) -> String {
    let program = match program_name {
        Some(name) => format!("{} (#{})", name, entry.program_id),
        None => format!("program #{}", entry.program_id),
    };

    let mut details = Vec::new();
    match (entry.sets_completed, entry.reps_completed) {
        (Some(sets), Some(reps)) => details.push(format!("{}x{}", sets, reps)),
        (Some(sets), None) => details.push(format!("{} sets", sets)),
        (None, Some(reps)) => details.push(format!("{} reps", reps)),
        (None, None) => {}
    }
    if let Some(w) = entry.weight_kg {
        details.push(format!("{:.1} kg", w));
    }
    if let Some(minutes) = entry.duration_minutes {
        details.push(format!("{} min", minutes));
    }

    let mut row = format!("  {}  {}  exercise #{}", entry.workout_date, program, entry.exercise_id);
    if !details.is_empty() {
        row.push_str(&format!("  {}", details.join(", ")));
    }
    if let Some(notes) = entry.notes.as_deref() {
        row.push_str(&format!(" - {}", notes));
    }
    row
}

/// Display a calorie report.
pub fn display_calorie_report(report: &CalorieReport) {
    let a = &report.analysis;

    println!();
    println!("=== Calorie Analysis ({}) ===", a.goal_description);
    println!();
    println!("BMR:             {:>6} kcal", a.bmr);
    println!("TDEE:            {:>6} kcal", a.tdee);
    println!("Adjustment:      {:>+6} kcal", a.calorie_adjustment);
    println!("Target calories: {:>6} kcal", a.target_calories);
    println!("BMI:             {:>6.1} ({})", a.bmi, a.bmi_category);
    println!();
    println!("--- Macronutrients ---");
    println!("{}", macro_row("Protein", &a.macronutrients.protein));
    println!("{}", macro_row("Carbohydrates", &a.macronutrients.carbs));
    println!("{}", macro_row("Fat", &a.macronutrients.fat));
    println!();
    println!("--- Recommendations ---");
    for line in &a.recommendations {
        println!("  - {}", line);
    }
    println!();

    display_meal_plans(&report.recommended_meal_plans, "Recommended Meal Plans");
}

/// Display a list of meal plans.
pub fn display_meal_plans<'a, I>(plans: I, title: &str)
where
    I: IntoIterator<Item = &'a MealPlan>,
{
    let rows: Vec<String> = plans.into_iter().map(plan_row).collect();
    if rows.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("=== {} ({} items) ===", title, rows.len());
    println!();
    for row in rows {
        println!("{}", row);
    }
    println!();
}

/// Display BMI with its category, or why it could not be computed.
pub fn display_bmi(bmi: Option<(f64, BmiCategory)>) {
    match bmi {
        Some((value, category)) => println!("BMI: {:.1} ({})", value, category),
        None => println!("BMI: not computable (height must be positive)"),
    }
}

/// Display weight goal progress.
pub fn display_progress(
    progress_percent: Option<f64>,
    current_weight_kg: f64,
    target_weight_kg: f64,
    weekly_rate: Option<f64>,
) {
    println!();
    println!("=== Goal Progress ===");
    println!();
    println!("Current weight: {:.1} kg", current_weight_kg);
    println!("Target weight:  {:.1} kg", target_weight_kg);
    match progress_percent {
        Some(p) => println!("Progress:       {:.1}%", p),
        None => println!("Progress:       n/a (start weight equals target)"),
    }
    if let Some(rate) = weekly_rate {
        println!("Weekly target:  {:.2} kg/week", rate);
    }
    println!();
}

/// Display a weight log summary.
pub fn display_weight_log(log: &WeightLog) {
    let (Some(first), Some(latest)) = (log.first(), log.latest()) else {
        println!("Weight log: (empty)");
        return;
    };

    println!(
        "Weight log: {} entries, {} {:.1} kg -> {} {:.1} kg (change {:+.1} kg)",
        log.len(),
        first.date,
        first.weight_kg,
        latest.date,
        latest.weight_kg,
        -log.total_change()
    );
}

/// Display workout program recommendations.
pub fn display_workout_recommendation(rec: &WorkoutRecommendation) {
    let a = &rec.analysis;

    println!();
    println!("=== Workout Recommendation ===");
    println!();
    match a.user_bmi {
        Some(bmi) => println!("BMI:        {:.1}", bmi),
        None => println!("BMI:        n/a"),
    }
    println!("Difficulty: {} ({})", a.difficulty, a.difficulty_reason);
    println!("Category:   {} ({})", a.category, a.category_reason);
    if a.used_fallback {
        println!("No {} programs found; showing any {} program.", a.category, a.difficulty);
    }
    println!();

    if rec.recommended_programs.is_empty() {
        println!("No programs available.");
        return;
    }

    for program in &rec.recommended_programs {
        println!(
            "  #{} {} [{}] - {}, {} weeks",
            program.id, program.name, program.category, program.difficulty, program.duration_weeks
        );
    }
    println!();
}

/// Display logged workout sessions, naming programs found in the catalog.
pub fn display_workout_sessions<'a, I>(sessions: I, catalog: &PlanCatalog)
where
    I: IntoIterator<Item = &'a WorkoutLogEntry>,
{
    let rows: Vec<String> = sessions
        .into_iter()
        .map(|e| {
            let name = catalog
                .get_workout_program(e.program_id)
                .map(|p| p.name.as_str());
            session_row(e, name)
        })
        .collect();

    if rows.is_empty() {
        println!("Workout log: (none)");
        return;
    }

    println!("=== Workout Sessions ({} items) ===", rows.len());
    println!();
    for row in rows {
        println!("{}", row);
    }
    println!();
}
