use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use serde::de::DeserializeOwned;
use tracing::info;

use super::manager::{WeightLog, WorkoutLog};

use crate::error::Result;
use crate::models::{MealPlan, WeightEntry, WorkoutLogEntry, WorkoutProgram};

/// Catalog file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    /// `.csv` files are CSV; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => CatalogFormat::Csv,
            _ => CatalogFormat::Json,
        }
    }
}

fn load_records<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let records = match CatalogFormat::from_path(path) {
        CatalogFormat::Json => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        CatalogFormat::Csv => {
            let mut rdr = csv::Reader::from_path(path)?;
            rdr.deserialize().collect::<std::result::Result<Vec<T>, csv::Error>>()?
        }
    };
    Ok(records)
}

/// Load meal plans from a JSON array or a CSV file with a header row.
///
/// Catalog order is preserved; ranking ties depend on it.
pub fn load_meal_plans<P: AsRef<Path>>(path: P) -> Result<Vec<MealPlan>> {
    let plans: Vec<MealPlan> = load_records(&path)?;
    info!(count = plans.len(), path = %path.as_ref().display(), "loaded meal plans");
    Ok(plans)
}

/// Load workout programs from a JSON array or a CSV file with a header row.
pub fn load_workout_programs<P: AsRef<Path>>(path: P) -> Result<Vec<WorkoutProgram>> {
    let programs: Vec<WorkoutProgram> = load_records(&path)?;
    info!(count = programs.len(), path = %path.as_ref().display(), "loaded workout programs");
    Ok(programs)
}

/// Deduplicate by date (last occurrence wins), sorted by date.
fn dedup_by_date<'a, I: IntoIterator<Item = &'a WeightEntry>>(entries: I) -> Vec<&'a WeightEntry> {
    let mut seen: BTreeMap<NaiveDate, &WeightEntry> = BTreeMap::new();
    for entry in entries {
        seen.insert(entry.key(), entry);
    }
    seen.into_values().collect()
}

/// Load weight entries from a JSON file.
///
/// Deduplicates by date (last occurrence wins) and sorts by date.
pub fn load_weight_log<P: AsRef<Path>>(path: P) -> Result<Vec<WeightEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<WeightEntry> = serde_json::from_str(&content)?;
    Ok(dedup_by_date(&entries).into_iter().cloned().collect())
}

/// Save weight entries to a JSON file.
///
/// Deduplicates by date before saving.
pub fn save_weight_log<P: AsRef<Path>>(path: P, entries: &[WeightEntry]) -> Result<()> {
    let deduped = dedup_by_date(entries);
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load workout sessions from a JSON file, in recorded order.
pub fn load_workout_log<P: AsRef<Path>>(path: P) -> Result<Vec<WorkoutLogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save workout sessions to a JSON file.
pub fn save_workout_log<P: AsRef<Path>>(path: P, entries: &[WorkoutLogEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the weight log, or an empty one if the file does not exist yet.
pub fn open_weight_log<P: AsRef<Path>>(path: P) -> Result<WeightLog> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "weight log not found, starting empty");
        return Ok(WeightLog::default());
    }
    Ok(WeightLog::new(load_weight_log(path)?))
}

/// Load the workout log, or an empty one if the file does not exist yet.
pub fn open_workout_log<P: AsRef<Path>>(path: P) -> Result<WorkoutLog> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "workout log not found, starting empty");
        return Ok(WorkoutLog::default());
    }
    let log = WorkoutLog::new(load_workout_log(path)?);
    info!(count = log.len(), path = %path.display(), "loaded workout log");
    Ok(log)
}

/// The explicit weight when given, otherwise the latest logged one.
///
/// The log file is only read when no explicit weight is given.
pub fn current_weight<P: AsRef<Path>>(explicit: Option<f64>, log_path: P) -> Result<Option<f64>> {
    if explicit.is_some() {
        return Ok(explicit);
    }
    Ok(open_weight_log(log_path)?.latest().map(|e| e.weight_kg))
}
