//! Axum handlers for the survey endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::{
    EvaluateSurveyCommand, EvaluateSurveyHandler, SubmitResponseCommand, SubmitResponseHandler,
    SurveyError,
};
use crate::domain::weighting::Judgment;
use crate::ports::ResponseStore;

use super::dto::{
    ErrorResponse, EvaluateSurveyRequest, EvaluationResponse, JudgmentDto, SubmitSurveyRequest,
    SubmitSurveyResponse,
};

/// Shared state for the survey routes.
#[derive(Clone)]
pub struct SurveyAppState {
    pub store: Arc<dyn ResponseStore>,
}

/// Maps survey errors onto HTTP status codes.
///
/// Validation failures are the respondent's to fix (422); numeric
/// degeneracies and storage failures are ours (500).
pub struct ApiError(SurveyError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SurveyError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SurveyError::Numeric(_) | SurveyError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "survey request failed");
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SurveyError> for ApiError {
    fn from(err: SurveyError) -> Self {
        Self(err)
    }
}

fn to_command(request: EvaluateSurveyRequest) -> Result<EvaluateSurveyCommand, SurveyError> {
    let judgments = request
        .judgments
        .into_iter()
        .map(|JudgmentDto { left, right, value }| Judgment::from_signed(left, right, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EvaluateSurveyCommand {
        criteria: request.criteria,
        judgments,
        method: request.method,
        defuzzifier: request.defuzzifier,
    })
}

/// `GET /health` - liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /api/survey/evaluate` - compute weights and consistency without
/// persisting anything.
pub async fn evaluate_survey(
    Json(request): Json<EvaluateSurveyRequest>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let command = to_command(request)?;
    let evaluation = EvaluateSurveyHandler::new().handle(command)?;
    Ok(Json(evaluation.into()))
}

/// `POST /api/survey/submit` - evaluate and persist one submission record.
pub async fn submit_survey(
    State(state): State<SurveyAppState>,
    Json(request): Json<SubmitSurveyRequest>,
) -> Result<Json<SubmitSurveyResponse>, ApiError> {
    let command = SubmitResponseCommand {
        respondent: request.respondent.into(),
        evaluation: to_command(request.survey)?,
    };

    let result = SubmitResponseHandler::new(state.store.clone())
        .handle(command)
        .await?;

    Ok(Json(SubmitSurveyResponse::from_parts(
        &result.record,
        result.evaluation,
    )))
}
