//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while validating survey input.
///
/// All variants are raised before any matrix or weight computation runs;
/// the core never produces partial results from invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("A comparison magnitude of zero has no reciprocal; select a nonzero value")]
    ZeroMagnitude,

    #[error("Missing judgment for criteria pair ({left}, {right})")]
    MissingJudgment { left: usize, right: usize },

    #[error("Duplicate judgment for criteria pair ({left}, {right})")]
    DuplicateJudgment { left: usize, right: usize },

    #[error("Criterion index {index} is out of range for {count} criteria")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Judgment pair ({left}, {right}) must reference the lower-indexed criterion first")]
    PairNotOrdered { left: usize, right: usize },

    #[error("Triangular fuzzy number ({a}, {b}, {c}) must satisfy 0 < a <= b <= c")]
    MalformedTfn { a: f64, b: f64, c: f64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Internal invariant violations in otherwise-valid computations.
///
/// These should not occur when inputs satisfy the validation rules; they are
/// reported as internal errors, not user-facing input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("Column {column} sums to {sum}, too close to zero to normalize")]
    DegenerateColumnSum { column: usize, sum: f64 },

    #[error("Weight for criterion {index} is {value}; expected a finite non-negative number")]
    InvalidWeight { index: usize, value: f64 },

    #[error("Weight vector sums to {sum}; expected 1 within tolerance")]
    InvalidWeightSum { sum: f64 },

    #[error("Eigenvalue iteration did not converge within {iterations} iterations")]
    NonConvergence { iterations: usize },
}
