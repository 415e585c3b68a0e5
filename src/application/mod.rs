//! Application layer - command handlers orchestrating the domain core.

pub mod handlers;

pub use handlers::{
    EvaluateSurveyCommand, EvaluateSurveyHandler, SubmitResponseCommand, SubmitResponseHandler,
    SurveyError, SurveyEvaluation,
};
