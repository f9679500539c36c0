use thiserror::Error;

/// Reasons a user-supplied input is refused before any computation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter the cat's weight.")]
    MissingWeight,

    #[error("Please enter a valid weight!")]
    InvalidWeight,

    #[error("The weight seems too large (over {max} kg), please check the input!")]
    ImplausibleWeight { max: f64 },

    #[error("Please select the cat's life stage!")]
    MissingLifeStage,

    #[error("Invalid life stage: {0}")]
    InvalidLifeStage(String),

    #[error("Invalid amount for {food}: '{value}' is not between 0 and 100000 g")]
    InvalidGrams { food: String, value: String },
}

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
