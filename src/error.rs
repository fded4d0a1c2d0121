use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("No matching workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{code} expects {expected} arguments, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{operation} is not defined for a generic training")]
    UnsupportedOperation { operation: &'static str },

    #[error("Duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("Height must be a positive number, got {0}")]
    InvalidHeight(f64),

    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("Malformed package: {0}")]
    InvalidPackage(String),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
