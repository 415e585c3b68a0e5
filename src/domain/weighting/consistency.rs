//! Consistency Evaluator - lambda_max, CI, CR, and the acceptability flag.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::NumericError;

use super::matrix::ComparisonMatrix;
use super::weights::WeightVector;

/// A matrix with CR below this threshold is considered consistent.
pub const CR_ACCEPTABLE_THRESHOLD: f64 = 0.10;

/// Saaty's random index table for n = 1..=10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Fallback random index for matrices larger than the table.
const RANDOM_INDEX_FALLBACK: f64 = 1.0;

/// Convergence tolerance for power iteration.
const POWER_ITERATION_TOLERANCE: f64 = 1e-10;

/// Iteration cap; a positive reciprocal matrix converges far earlier.
const POWER_ITERATION_MAX: usize = 1000;

/// How lambda_max is computed.
///
/// The two strategies are not numerically equivalent in general; the report
/// records which one produced its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaMethod {
    /// dot(column sums, weights) - exact when the weights were derived from
    /// the column-normalized matrix, an approximation otherwise.
    ColumnSumDot,
    /// Dominant (Perron-Frobenius) eigenvalue by normalized power
    /// iteration - for weights derived independently of the matrix
    /// normalization.
    PowerIteration,
}

/// The consistency metrics for one comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub acceptable: bool,
    pub method: LambdaMethod,
}

/// Consistency computation over a crisp matrix and its weight vector.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Computes lambda_max, CI, CR, and the acceptability flag.
    ///
    /// CR >= 0.10 is a fully computed result, flagged via `acceptable`;
    /// it is never an error and never blocks the caller.
    ///
    /// # Edge Cases
    /// - n = 1: trivially consistent (lambda_max = 1, CI = CR = 0)
    /// - n = 2: a reciprocal 2x2 matrix is always consistent; CI is
    ///   reported as 0 and RI = 0 forces CR = 0
    /// - n > 10: RI falls back to 1.0 instead of failing
    pub fn evaluate(
        matrix: &ComparisonMatrix,
        weights: &WeightVector,
        method: LambdaMethod,
    ) -> Result<ConsistencyReport, NumericError> {
        let n = matrix.n();

        let lambda_max = match method {
            LambdaMethod::ColumnSumDot => Self::lambda_column_sum_dot(matrix, weights),
            LambdaMethod::PowerIteration => Self::lambda_power_iteration(matrix)?,
        };

        let consistency_index = if n <= 2 {
            0.0
        } else {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        };

        let random_index = Self::random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        Ok(ConsistencyReport {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            acceptable: consistency_ratio < CR_ACCEPTABLE_THRESHOLD,
            method,
        })
    }

    /// Random index for an n x n matrix.
    pub fn random_index(n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        RANDOM_INDEX
            .get(n - 1)
            .copied()
            .unwrap_or(RANDOM_INDEX_FALLBACK)
    }

    fn lambda_column_sum_dot(matrix: &ComparisonMatrix, weights: &WeightVector) -> f64 {
        matrix
            .column_sums()
            .iter()
            .zip(weights.values())
            .map(|(sum, weight)| sum * weight)
            .sum()
    }

    /// Dominant eigenvalue by power iteration.
    ///
    /// The matrix is strictly positive, so Perron-Frobenius guarantees a
    /// simple dominant eigenvalue with a positive eigenvector; iterating
    /// from the uniform vector converges to it. The iterate is renormalized
    /// to sum 1 each step, which makes the eigenvalue estimate the sum of
    /// the un-normalized image.
    fn lambda_power_iteration(matrix: &ComparisonMatrix) -> Result<f64, NumericError> {
        let n = matrix.n();
        if n == 1 {
            return Ok(matrix.get(0, 0));
        }

        let mut vector = vec![1.0 / n as f64; n];
        let mut lambda = 0.0;

        for _ in 0..POWER_ITERATION_MAX {
            let mut image = vec![0.0; n];
            for i in 0..n {
                image[i] = matrix
                    .row(i)
                    .iter()
                    .zip(&vector)
                    .map(|(m, v)| m * v)
                    .sum();
            }

            let next_lambda: f64 = image.iter().sum();
            if !next_lambda.is_finite() || next_lambda <= 0.0 {
                return Err(NumericError::NonConvergence {
                    iterations: POWER_ITERATION_MAX,
                });
            }

            for value in image.iter_mut() {
                *value /= next_lambda;
            }

            let converged = (next_lambda - lambda).abs() < POWER_ITERATION_TOLERANCE;
            vector = image;
            lambda = next_lambda;
            if converged {
                return Ok(lambda);
            }
        }

        Err(NumericError::NonConvergence {
            iterations: POWER_ITERATION_MAX,
        })
    }
}
