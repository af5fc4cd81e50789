use std::cmp::Reverse;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{CoachError, Result};
use crate::models::{CalorieAnalysis, MealPlan, WeightEntry, WorkoutLogEntry, WorkoutProgram};
use crate::planner;

/// Read-only plan catalog: meal plans and workout programs.
///
/// Stands in for the relational store the plans would normally come from;
/// catalog order is kept as loaded.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    meal_plans: Vec<MealPlan>,
    workout_programs: Vec<WorkoutProgram>,
}

impl PlanCatalog {
    pub fn new(meal_plans: Vec<MealPlan>, workout_programs: Vec<WorkoutProgram>) -> Self {
        Self {
            meal_plans,
            workout_programs,
        }
    }

    /// All meal plans, in catalog order, as ranking candidates.
    pub fn meal_plan_candidates(&self) -> &[MealPlan] {
        &self.meal_plans
    }

    pub fn workout_programs(&self) -> &[WorkoutProgram] {
        &self.workout_programs
    }

    /// Get a meal plan by id.
    pub fn get_meal_plan(&self, id: u64) -> Option<&MealPlan> {
        self.meal_plans.iter().find(|p| p.id == id)
    }

    /// Get a workout program by id.
    pub fn get_workout_program(&self, id: u64) -> Option<&WorkoutProgram> {
        self.workout_programs.iter().find(|p| p.id == id)
    }

    /// Check a workout program id against the catalog.
    ///
    /// A catalog without workout programs accepts any id.
    pub fn ensure_workout_program(&self, id: u64) -> Result<()> {
        if self.workout_programs.is_empty() || self.get_workout_program(id).is_some() {
            return Ok(());
        }
        Err(CoachError::InvalidInput(format!(
            "unknown workout program id {}",
            id
        )))
    }

    /// Meal plans recommended for an analysis: ranked by the goal's category
    /// and the exact calorie target.
    pub fn recommend_meal_plans(
        &self,
        analysis: &CalorieAnalysis,
        category: &str,
        limit: usize,
    ) -> Vec<MealPlan> {
        planner::rank_plans(
            self.meal_plan_candidates(),
            category,
            analysis.target_calories_exact,
            limit,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    /// List meal plans filtered by category and difficulty, sorted by name.
    ///
    /// `limit` of `None` returns every match.
    pub fn list_meal_plans(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<&MealPlan> {
        let mut plans: Vec<&MealPlan> = self
            .meal_plans
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| difficulty.is_none_or(|d| p.difficulty.as_deref() == Some(d)))
            .collect();

        plans.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(limit) = limit {
            plans.truncate(limit);
        }
        plans
    }

    pub fn is_empty(&self) -> bool {
        self.meal_plans.is_empty() && self.workout_programs.is_empty()
    }
}

/// Body weight history, one entry per date, kept sorted by date.
#[derive(Debug, Clone, Default)]
pub struct WeightLog {
    entries: Vec<WeightEntry>,
}

impl WeightLog {
    /// Create a log from entries in any order. Later duplicates of a date win.
    pub fn new(entries: Vec<WeightEntry>) -> Self {
        let mut log = Self::default();
        for entry in entries {
            log.insert(entry);
        }
        log
    }

    fn insert(&mut self, entry: WeightEntry) {
        match self
            .entries
            .binary_search_by_key(&entry.date, |e| e.date)
        {
            Ok(idx) => self.entries[idx] = entry,
            Err(idx) => self.entries.insert(idx, entry),
        }
    }

    /// Insert or replace the entry for a date.
    pub fn upsert(&mut self, entry: WeightEntry) -> Result<()> {
        if !entry.is_valid() {
            return Err(CoachError::InvalidInput(format!(
                "invalid weight entry: {} kg on '{}'",
                entry.weight_kg, entry.date
            )));
        }

        debug!(date = %entry.date, weight_kg = entry.weight_kg, "upserting weight entry");
        self.insert(entry);
        Ok(())
    }

    /// Get the entry for a date.
    pub fn get(&self, date: NaiveDate) -> Option<&WeightEntry> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.last()
    }

    /// Oldest entry.
    pub fn first(&self) -> Option<&WeightEntry> {
        self.entries.first()
    }

    /// Weight lost since the first entry (negative when gained).
    pub fn total_change(&self) -> f64 {
        match (self.first(), self.latest()) {
            (Some(first), Some(latest)) => first.weight_kg - latest.weight_kg,
            _ => 0.0,
        }
    }

    /// Entries in date order.
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Logged workout sessions, kept in recorded order.
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    entries: Vec<WorkoutLogEntry>,
}

impl WorkoutLog {
    pub fn new(entries: Vec<WorkoutLogEntry>) -> Self {
        Self { entries }
    }

    /// Validate and append a session.
    pub fn record(&mut self, entry: WorkoutLogEntry) -> Result<()> {
        entry.validate()?;
        debug!(
            program_id = entry.program_id,
            exercise_id = entry.exercise_id,
            date = %entry.workout_date,
            "recording workout session"
        );
        self.entries.push(entry);
        Ok(())
    }

    /// Sessions newest first (by workout date, then recording time),
    /// optionally for one program.
    pub fn recent(&self, program_id: Option<u64>, limit: Option<usize>) -> Vec<&WorkoutLogEntry> {
        let mut sessions: Vec<&WorkoutLogEntry> = self
            .entries
            .iter()
            .filter(|e| program_id.is_none_or(|id| e.program_id == id))
            .collect();

        sessions.sort_by_key(|e| Reverse((e.workout_date, e.logged_at)));
        if let Some(limit) = limit {
            sessions.truncate(limit);
        }
        sessions
    }

    pub fn entries(&self) -> &[WorkoutLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
