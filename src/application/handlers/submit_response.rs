//! SubmitResponseHandler - evaluate, then persist one immutable record.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::survey::{RespondentProfile, SubmissionRecord, WeightEntry};
use crate::ports::ResponseStore;

use super::evaluate_survey::{EvaluateSurveyCommand, EvaluateSurveyHandler, SurveyEvaluation};
use super::SurveyError;

/// Display rounding for the persisted weight table.
const WEIGHT_DISPLAY_DECIMALS: u32 = 4;

/// Command to submit a completed survey.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub respondent: RespondentProfile,
    pub evaluation: EvaluateSurveyCommand,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseResult {
    pub record: SubmissionRecord,
    pub evaluation: SurveyEvaluation,
}

/// Handler for survey submission.
pub struct SubmitResponseHandler {
    store: Arc<dyn ResponseStore>,
    evaluator: EvaluateSurveyHandler,
}

impl SubmitResponseHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            store,
            evaluator: EvaluateSurveyHandler::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
    ) -> Result<SubmitResponseResult, SurveyError> {
        // 1. Validate the respondent profile alongside the judgments; a
        //    submission is rejected as a whole or accepted as a whole.
        cmd.respondent.validate()?;

        // 2. Run the full evaluation pipeline.
        let evaluation = self.evaluator.handle(cmd.evaluation)?;

        // 3. Assemble the write-once record. Weights are rounded for the
        //    export table, matching what respondents were shown.
        let rounded = evaluation.weights.rounded(WEIGHT_DISPLAY_DECIMALS);
        let weights = evaluation
            .criteria
            .iter()
            .zip(rounded)
            .map(|(criterion, weight)| WeightEntry {
                criterion: criterion.clone(),
                weight,
            })
            .collect();

        let record = SubmissionRecord {
            response_id: Uuid::new_v4(),
            saved_at_utc: Utc::now(),
            respondent: cmd.respondent,
            criteria: evaluation.criteria.clone(),
            weights,
            consistency_ratio: evaluation.consistency.consistency_ratio,
            lambda_max: evaluation.consistency.lambda_max,
            comparison_matrix: evaluation.comparison_matrix.clone(),
        };

        // 4. Persist through the port.
        self.store.save(&record).await?;

        tracing::info!(
            response_id = %record.response_id,
            criteria = record.criteria.len(),
            cr = record.consistency_ratio,
            "survey response submitted"
        );

        Ok(SubmitResponseResult { record, evaluation })
    }
}
