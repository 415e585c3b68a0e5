//! Weight Engine - derives a criterion weight vector from a comparison matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::NumericError;

use super::matrix::{ComparisonMatrix, FuzzyComparisonMatrix};
use super::tfn::TriangularFuzzyNumber;

/// Tolerance for the weight-vector sum-to-one contract.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Guard against normalizing by a degenerate column sum.
const COLUMN_SUM_EPSILON: f64 = 1e-12;

/// Which weight-derivation algorithm to run.
///
/// A configuration choice made by the caller, never auto-detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMethod {
    /// Column-stochastic normalization followed by row means, on the crisp
    /// matrix (or the fuzzy middle-value projection).
    CrispMean,
    /// Row-wise fuzzy geometric mean, defuzzified and normalized.
    #[default]
    FuzzyExtentAnalysis,
}

/// How to collapse a synthetic-extent TFN to a crisp value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defuzzifier {
    /// (a + 4b + c) / 6 - weighted toward the modal value.
    #[default]
    WeightedAverage,
    /// (a + b + c) / 3 - plain centroid of the triangle corners.
    SimpleMean,
}

impl Defuzzifier {
    /// Collapses a TFN to a single crisp value.
    pub fn apply(&self, tfn: &TriangularFuzzyNumber) -> f64 {
        match self {
            Defuzzifier::WeightedAverage => (tfn.a() + 4.0 * tfn.b() + tfn.c()) / 6.0,
            Defuzzifier::SimpleMean => (tfn.a() + tfn.b() + tfn.c()) / 3.0,
        }
    }
}

/// A validated weight vector: non-negative entries summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Validates and wraps raw weights.
    ///
    /// Every entry must be finite and non-negative and the sum must be 1
    /// within `WEIGHT_SUM_TOLERANCE`; anything else is an internal invariant
    /// violation, never silently clipped.
    pub fn try_new(values: Vec<f64>) -> Result<Self, NumericError> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(NumericError::InvalidWeight { index, value });
            }
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(NumericError::InvalidWeightSum { sum });
        }
        Ok(Self(values))
    }

    /// The weights, index-aligned with the criteria order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Weight for criterion `index`.
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector is empty (never for a valid survey).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights rounded for display; the unrounded values remain the
    /// computational truth.
    pub fn rounded(&self, decimals: u32) -> Vec<f64> {
        let factor = 10f64.powi(decimals as i32);
        self.0.iter().map(|w| (w * factor).round() / factor).collect()
    }
}

/// Weight derivation functions.
pub struct WeightEngine;

impl WeightEngine {
    /// Derives weights by the given method.
    pub fn derive(
        method: WeightMethod,
        defuzzifier: Defuzzifier,
        fuzzy: &FuzzyComparisonMatrix,
        crisp: &ComparisonMatrix,
    ) -> Result<WeightVector, NumericError> {
        match method {
            WeightMethod::CrispMean => Self::crisp_mean(crisp),
            WeightMethod::FuzzyExtentAnalysis => Self::fuzzy_extent_analysis(fuzzy, defuzzifier),
        }
    }

    /// Crisp method: column sums, column-stochastic normalization, row
    /// means, final renormalization.
    ///
    /// # Edge Cases
    /// - 1x1 matrix: returns [1.0]
    /// - Near-zero column sum: fails fast instead of propagating NaN
    pub fn crisp_mean(matrix: &ComparisonMatrix) -> Result<WeightVector, NumericError> {
        let n = matrix.n();
        let column_sums = matrix.column_sums();
        for (column, &sum) in column_sums.iter().enumerate() {
            if !sum.is_finite() || sum.abs() < COLUMN_SUM_EPSILON {
                return Err(NumericError::DegenerateColumnSum { column, sum });
            }
        }

        let mut means = Vec::with_capacity(n);
        for i in 0..n {
            let normalized_row_sum: f64 = matrix
                .row(i)
                .iter()
                .zip(&column_sums)
                .map(|(value, sum)| value / sum)
                .sum();
            means.push(normalized_row_sum / n as f64);
        }

        Self::normalize(means)
    }

    /// Fuzzy extent-analysis method: per-row component-wise geometric mean
    /// of the TFNs, defuzzified and normalized.
    pub fn fuzzy_extent_analysis(
        matrix: &FuzzyComparisonMatrix,
        defuzzifier: Defuzzifier,
    ) -> Result<WeightVector, NumericError> {
        let n = matrix.n();
        let exponent = 1.0 / n as f64;

        let mut crisp_extents = Vec::with_capacity(n);
        for i in 0..n {
            let product = matrix
                .row(i)
                .iter()
                .fold(TriangularFuzzyNumber::IDENTITY, |acc, tfn| acc.mul(tfn));
            let extent = product.powf(exponent);
            crisp_extents.push(defuzzifier.apply(&extent));
        }

        Self::normalize(crisp_extents)
    }

    /// Scales raw scores to sum 1 and validates the result.
    fn normalize(raw: Vec<f64>) -> Result<WeightVector, NumericError> {
        for (index, &value) in raw.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(NumericError::InvalidWeight { index, value });
            }
        }
        let total: f64 = raw.iter().sum();
        if !total.is_finite() || total < COLUMN_SUM_EPSILON {
            return Err(NumericError::InvalidWeightSum { sum: total });
        }
        WeightVector::try_new(raw.into_iter().map(|v| v / total).collect())
    }
}
