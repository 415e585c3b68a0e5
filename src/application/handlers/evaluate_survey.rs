//! EvaluateSurveyHandler - pure computation from judgments to weights and
//! consistency metrics.

use crate::domain::weighting::{
    ComparisonMatrix, ConsistencyEvaluator, ConsistencyReport, Defuzzifier, FuzzyComparisonMatrix,
    Judgment, JudgmentSet, LabeledMatrix, LambdaMethod, WeightEngine, WeightMethod, WeightVector,
};

use super::SurveyError;

/// Command to evaluate one respondent's full set of judgments.
#[derive(Debug, Clone)]
pub struct EvaluateSurveyCommand {
    pub criteria: Vec<String>,
    pub judgments: Vec<Judgment>,
    pub method: WeightMethod,
    pub defuzzifier: Defuzzifier,
}

/// The complete evaluation snapshot for one judgment set.
///
/// Derived in a single pass and never mutated; a changed judgment means a
/// fresh evaluation.
#[derive(Debug, Clone)]
pub struct SurveyEvaluation {
    pub criteria: Vec<String>,
    pub weights: WeightVector,
    pub consistency: ConsistencyReport,
    pub comparison_matrix: LabeledMatrix,
    pub method: WeightMethod,
}

/// Handler running the judgments -> matrix -> weights -> consistency pipeline.
#[derive(Debug, Clone, Default)]
pub struct EvaluateSurveyHandler;

impl EvaluateSurveyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EvaluateSurveyCommand) -> Result<SurveyEvaluation, SurveyError> {
        // 1. Validate completeness and well-formedness; nothing below runs
        //    on a partial judgment set.
        let set = JudgmentSet::new(cmd.criteria, cmd.judgments)?;

        tracing::debug!(
            criteria = set.criterion_count(),
            method = ?cmd.method,
            "evaluating survey"
        );

        // 2. Build both matrix views; the crisp view is the middle-value
        //    projection of the fuzzy one.
        let fuzzy = FuzzyComparisonMatrix::from_judgments(&set);
        let crisp: ComparisonMatrix = fuzzy.middle_projection();

        // 3. Derive weights by the selected method.
        let weights = WeightEngine::derive(cmd.method, cmd.defuzzifier, &fuzzy, &crisp)?;

        // 4. Consistency on the crisp matrix. The dot-product lambda is
        //    exact only when the weights came from the normalized crisp
        //    matrix; the fuzzy path derives weights independently, so it
        //    gets the eigenvalue.
        let lambda_method = match cmd.method {
            WeightMethod::CrispMean => LambdaMethod::ColumnSumDot,
            WeightMethod::FuzzyExtentAnalysis => LambdaMethod::PowerIteration,
        };
        let consistency = ConsistencyEvaluator::evaluate(&crisp, &weights, lambda_method)?;

        Ok(SurveyEvaluation {
            criteria: set.criteria().to_vec(),
            weights,
            consistency,
            comparison_matrix: crisp.to_table(),
            method: cmd.method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::weighting::CR_ACCEPTABLE_THRESHOLD;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn command(
        names: &[&str],
        pairs: &[(usize, usize, i8)],
        method: WeightMethod,
    ) -> EvaluateSurveyCommand {
        EvaluateSurveyCommand {
            criteria: labels(names),
            judgments: pairs
                .iter()
                .map(|&(l, r, v)| Judgment::from_signed(l, r, v).unwrap())
                .collect(),
            method,
            defuzzifier: Defuzzifier::WeightedAverage,
        }
    }

    #[test]
    fn all_equal_judgments_give_uniform_weights_and_zero_cr() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(
                &["X", "Y", "Z"],
                &[(0, 1, 1), (0, 2, 1), (1, 2, 1)],
                WeightMethod::CrispMean,
            ))
            .unwrap();

        for &w in evaluation.weights.values() {
            assert!((w - 1.0 / 3.0).abs() < 1e-9);
        }
        assert!((evaluation.consistency.lambda_max - 3.0).abs() < 1e-9);
        assert!(evaluation.consistency.consistency_ratio.abs() < 1e-9);
        assert!(evaluation.consistency.acceptable);
    }

    #[test]
    fn dominant_pair_splits_ninety_ten() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(&["X", "Y"], &[(0, 1, 9)], WeightMethod::CrispMean))
            .unwrap();

        assert!((evaluation.weights.get(0) - 0.9).abs() < 1e-9);
        assert!((evaluation.weights.get(1) - 0.1).abs() < 1e-9);
        assert_eq!(evaluation.comparison_matrix.values[0][1], 9.0);
    }

    #[test]
    fn incomplete_judgments_fail_before_any_computation() {
        let err = EvaluateSurveyHandler::new()
            .handle(command(
                &["X", "Y", "Z"],
                &[(0, 1, 3)],
                WeightMethod::CrispMean,
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            SurveyError::Validation(ValidationError::MissingJudgment { .. })
        ));
    }

    #[test]
    fn cyclic_judgments_evaluate_but_flag_inconsistency() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(
                &["A", "B", "C"],
                &[(0, 1, 9), (1, 2, 9), (0, 2, -9)],
                WeightMethod::CrispMean,
            ))
            .unwrap();

        assert!(evaluation.consistency.consistency_ratio > CR_ACCEPTABLE_THRESHOLD);
        assert!(!evaluation.consistency.acceptable);
        // The weights are still a fully computed, valid result.
        let sum: f64 = evaluation.weights.values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_method_uses_eigenvalue_consistency() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(
                &["X", "Y", "Z"],
                &[(0, 1, 3), (0, 2, 5), (1, 2, 2)],
                WeightMethod::FuzzyExtentAnalysis,
            ))
            .unwrap();
        assert_eq!(evaluation.consistency.method, LambdaMethod::PowerIteration);
    }

    #[test]
    fn crisp_method_uses_dot_product_consistency() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(&["X", "Y"], &[(0, 1, 3)], WeightMethod::CrispMean))
            .unwrap();
        assert_eq!(evaluation.consistency.method, LambdaMethod::ColumnSumDot);
    }

    #[test]
    fn single_criterion_gets_unit_weight() {
        let evaluation = EvaluateSurveyHandler::new()
            .handle(command(&["Only"], &[], WeightMethod::CrispMean))
            .unwrap();
        assert_eq!(evaluation.weights.values(), &[1.0]);
        assert_eq!(evaluation.consistency.consistency_ratio, 0.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let cmd = command(
            &["X", "Y", "Z"],
            &[(0, 1, 5), (0, 2, -3), (1, 2, 2)],
            WeightMethod::FuzzyExtentAnalysis,
        );
        let first = EvaluateSurveyHandler::new().handle(cmd.clone()).unwrap();
        let second = EvaluateSurveyHandler::new().handle(cmd).unwrap();
        assert_eq!(first.weights, second.weights);
        assert_eq!(first.consistency, second.consistency);
    }
}
