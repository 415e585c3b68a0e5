//! Axum router configuration for survey endpoints.

use axum::{routing::post, Router};

use super::handlers::{evaluate_survey, submit_survey, SurveyAppState};

/// Create the survey API router.
///
/// # Routes
///
/// - `POST /evaluate` - Compute weights and consistency (nothing persisted)
/// - `POST /submit` - Evaluate and persist a submission record
pub fn survey_routes() -> Router<SurveyAppState> {
    Router::new()
        .route("/evaluate", post(evaluate_survey))
        .route("/submit", post(submit_survey))
}

/// Create the complete survey module router.
///
/// Suitable for mounting at `/api/survey`.
pub fn survey_router() -> Router<SurveyAppState> {
    survey_routes()
}
