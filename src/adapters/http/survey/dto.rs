//! Data transfer objects for survey HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SurveyEvaluation;
use crate::domain::survey::{RespondentProfile, SubmissionRecord};
use crate::domain::weighting::{Defuzzifier, LabeledMatrix, LambdaMethod, WeightMethod};

/// Display rounding for weights in API responses.
const WEIGHT_DISPLAY_DECIMALS: u32 = 4;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// One pairwise judgment in the signed widget encoding.
///
/// `value` ranges over -9..=9 excluding 0: positive favors the left
/// (lower-indexed) criterion, negative the right, magnitude 1 means equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentDto {
    /// Index of the lower-indexed criterion
    pub left: usize,
    /// Index of the higher-indexed criterion
    pub right: usize,
    /// Signed importance magnitude
    pub value: i8,
}

/// Request to evaluate a judgment set without persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateSurveyRequest {
    /// Ordered criterion labels
    pub criteria: Vec<String>,
    /// One judgment per unordered criterion pair
    pub judgments: Vec<JudgmentDto>,
    /// Weight derivation method
    #[serde(default)]
    pub method: WeightMethod,
    /// Defuzzification rule (fuzzy method only)
    #[serde(default)]
    pub defuzzifier: Defuzzifier,
}

/// Respondent metadata accompanying a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondentDto {
    pub age_range: String,
    pub field_of_work: String,
    #[serde(default)]
    pub field_of_work_other: Option<String>,
    #[serde(default)]
    pub difficulty_feedback: Option<String>,
    #[serde(default)]
    pub suggestions: Option<String>,
}

impl From<RespondentDto> for RespondentProfile {
    fn from(dto: RespondentDto) -> Self {
        RespondentProfile {
            age_range: dto.age_range,
            field_of_work: dto.field_of_work,
            field_of_work_other: dto.field_of_work_other,
            difficulty_feedback: dto.difficulty_feedback,
            suggestions: dto.suggestions,
        }
    }
}

/// Request to submit a completed survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSurveyRequest {
    pub respondent: RespondentDto,
    #[serde(flatten)]
    pub survey: EvaluateSurveyRequest,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// One row of the weight table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntryDto {
    pub criterion: String,
    pub weight: f64,
}

/// The consistency metrics triple plus classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyDto {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub acceptable: bool,
    pub method: LambdaMethod,
}

/// Full evaluation result returned to the form layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub criteria: Vec<String>,
    /// Weight per criterion, rounded to 4 decimals for display
    pub weights: Vec<WeightEntryDto>,
    pub consistency: ConsistencyDto,
    /// The crisp comparison matrix as a label-indexed table
    pub comparison_matrix: LabeledMatrix,
    pub method: WeightMethod,
}

impl From<SurveyEvaluation> for EvaluationResponse {
    fn from(evaluation: SurveyEvaluation) -> Self {
        let rounded = evaluation.weights.rounded(WEIGHT_DISPLAY_DECIMALS);
        let weights = evaluation
            .criteria
            .iter()
            .zip(rounded)
            .map(|(criterion, weight)| WeightEntryDto {
                criterion: criterion.clone(),
                weight,
            })
            .collect();

        EvaluationResponse {
            criteria: evaluation.criteria,
            weights,
            consistency: ConsistencyDto {
                lambda_max: evaluation.consistency.lambda_max,
                consistency_index: evaluation.consistency.consistency_index,
                consistency_ratio: evaluation.consistency.consistency_ratio,
                acceptable: evaluation.consistency.acceptable,
                method: evaluation.consistency.method,
            },
            comparison_matrix: evaluation.comparison_matrix,
            method: evaluation.method,
        }
    }
}

/// Response after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSurveyResponse {
    pub response_id: String,
    pub saved_at_utc: String,
    pub evaluation: EvaluationResponse,
}

impl SubmitSurveyResponse {
    pub fn from_parts(record: &SubmissionRecord, evaluation: SurveyEvaluation) -> Self {
        Self {
            response_id: record.response_id.to_string(),
            saved_at_utc: record.saved_at_utc.to_rfc3339(),
            evaluation: evaluation.into(),
        }
    }
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
