//! Command handlers for survey evaluation and submission.

mod evaluate_survey;
mod submit_response;

use thiserror::Error;

use crate::domain::foundation::{NumericError, ValidationError};
use crate::ports::ResponseStoreError;

pub use evaluate_survey::{EvaluateSurveyCommand, EvaluateSurveyHandler, SurveyEvaluation};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};

/// Errors surfaced by the survey handlers.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("Failed to persist response: {0}")]
    Store(#[from] ResponseStoreError),
}
