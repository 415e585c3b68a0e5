//! Comparison matrices built from a validated judgment set.

use serde::{Deserialize, Serialize};

use super::judgment::JudgmentSet;
use super::tfn::TriangularFuzzyNumber;

/// A crisp n x n pairwise comparison matrix.
///
/// Invariants hold by construction: unit diagonal, `M[j][i] = 1 / M[i][j]`,
/// all entries strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Builds the crisp matrix from a validated judgment set.
    pub fn from_judgments(set: &JudgmentSet) -> Self {
        let n = set.criterion_count();
        let mut cells = vec![vec![1.0; n]; n];
        for judgment in set.judgments() {
            let value = judgment.crisp_value();
            cells[judgment.left()][judgment.right()] = value;
            cells[judgment.right()][judgment.left()] = 1.0 / value;
        }
        Self {
            labels: set.criteria().to_vec(),
            cells,
        }
    }

    pub(crate) fn from_cells(labels: Vec<String>, cells: Vec<Vec<f64>>) -> Self {
        Self { labels, cells }
    }

    /// Matrix dimension (number of criteria).
    pub fn n(&self) -> usize {
        self.labels.len()
    }

    /// The criterion labels, in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Entry at row i, column j.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i][j]
    }

    /// Row i as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i]
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.n();
        let mut sums = vec![0.0; n];
        for row in &self.cells {
            for (j, value) in row.iter().enumerate() {
                sums[j] += value;
            }
        }
        sums
    }

    /// The matrix as a label-indexed table for display and export.
    pub fn to_table(&self) -> LabeledMatrix {
        LabeledMatrix {
            index: self.labels.clone(),
            columns: self.labels.clone(),
            values: self.cells.clone(),
        }
    }
}

/// A fuzzy n x n pairwise comparison matrix with one TFN per cell.
///
/// Same invariants as the crisp matrix, with (1, 1, 1) on the diagonal and
/// the fuzzy reciprocal below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyComparisonMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<TriangularFuzzyNumber>>,
}

impl FuzzyComparisonMatrix {
    /// Builds the fuzzy matrix from a validated judgment set.
    pub fn from_judgments(set: &JudgmentSet) -> Self {
        let n = set.criterion_count();
        let mut cells = vec![vec![TriangularFuzzyNumber::IDENTITY; n]; n];
        for judgment in set.judgments() {
            let value = judgment.fuzzy_value();
            cells[judgment.left()][judgment.right()] = value;
            cells[judgment.right()][judgment.left()] = value.reciprocal();
        }
        Self {
            labels: set.criteria().to_vec(),
            cells,
        }
    }

    /// Matrix dimension (number of criteria).
    pub fn n(&self) -> usize {
        self.labels.len()
    }

    /// The criterion labels, in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Entry at row i, column j.
    pub fn get(&self, i: usize, j: usize) -> TriangularFuzzyNumber {
        self.cells[i][j]
    }

    /// Row i as a slice.
    pub fn row(&self, i: usize) -> &[TriangularFuzzyNumber] {
        &self.cells[i]
    }

    /// Projects the matrix onto the modal (middle) component of each cell.
    ///
    /// With the scale table anchored on the Saaty integers, this projection
    /// is exactly the classical crisp matrix; it backs display, the
    /// crisp-mean weight variant, and consistency evaluation.
    pub fn middle_projection(&self) -> ComparisonMatrix {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().map(|tfn| tfn.b()).collect())
            .collect();
        ComparisonMatrix::from_cells(self.labels.clone(), cells)
    }
}

/// A label-indexed 2D table, the display/export form of a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}
