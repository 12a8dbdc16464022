use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input format: {0}")]
    InputParse(#[from] InputParseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),
}

/// A request field could not be read as the numeric type it stands for.
#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("{field}: cannot convert {value} to a decimal")]
    InvalidDecimal { field: String, value: String },

    #[error("{field}: {value} is not an integer")]
    InvalidInteger { field: String, value: String },

    #[error("additionalPeriods: {0}")]
    InvalidPeriods(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("initialAmount and defaultDays must be positive")]
    NonPositiveInitialAmount,

    #[error("initialAmount and defaultDays must be positive")]
    NonPositiveDefaultDays,

    #[error("Total projection length of {total} days exceeds the maximum of {max}")]
    TooManyDays { total: u64, max: u32 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalculationError {
    #[error("portfolio value exceeds the representable decimal range on day {day}")]
    Overflow { day: u32 },
}
