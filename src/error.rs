use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("Invalid activity level: {value}{}", suggestion_suffix(.suggestion))]
    InvalidActivityLevel {
        value: String,
        suggestion: Option<&'static str>,
    },

    #[error("Not applicable: {0}")]
    NotApplicable(String),

    #[error("Not computable: {0}")]
    NotComputable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
