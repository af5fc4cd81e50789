use dialoguer::{Confirm, Input, Select};

use crate::error::{CoachError, Result};
use crate::models::{ActivityLevel, CalorieRequest};

const GENDERS: [&str; 2] = ["male", "female"];
const GOALS: [&str; 3] = ["weight_loss", "muscle_gain", "maintenance"];

/// Prompt for a positive number.
pub fn prompt_positive_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CoachError::InvalidInput("Invalid number".to_string()))?;

    if value <= 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&GENDERS)
        .default(0)
        .interact()?;

    Ok(GENDERS[selection].to_string())
}

/// Prompt for activity level.
pub fn prompt_activity_level() -> Result<String> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for goal, allowing a free-form value.
pub fn prompt_goal() -> Result<String> {
    let mut options: Vec<&str> = GOALS.to_vec();
    options.push("other");

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < GOALS.len() {
        return Ok(GOALS[selection].to_string());
    }

    let custom: String = Input::new().with_prompt("Describe your goal").interact_text()?;
    Ok(custom.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill in every missing field of a calorie request interactively.
pub fn complete_calorie_request(mut request: CalorieRequest) -> Result<CalorieRequest> {
    for field in request.missing_fields() {
        match field.as_str() {
            "age" => request.age = Some(prompt_positive_number("Age (years)")?),
            "weight_kg" => request.weight_kg = Some(prompt_positive_number("Weight (kg)")?),
            "height_cm" => request.height_cm = Some(prompt_positive_number("Height (cm)")?),
            "gender" => request.gender = Some(prompt_gender()?),
            "activity_level" => request.activity_level = Some(prompt_activity_level()?),
            "goal" => request.goal = Some(prompt_goal()?),
            _ => {}
        }
    }

    Ok(request)
}
