//! Pairwise judgments and the validated judgment set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::scale::{Dominance, ImportanceLevel};
use super::tfn::TriangularFuzzyNumber;

/// One pairwise comparison between two criteria.
///
/// Always references the lower-indexed criterion first (`left < right`);
/// the dominance flag records which side the importance level applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    left: usize,
    right: usize,
    level: ImportanceLevel,
    dominance: Dominance,
}

impl Judgment {
    /// Creates a judgment for the unordered pair (left, right).
    pub fn new(
        left: usize,
        right: usize,
        level: ImportanceLevel,
        dominance: Dominance,
    ) -> Result<Self, ValidationError> {
        if left >= right {
            return Err(ValidationError::PairNotOrdered { left, right });
        }
        Ok(Self {
            left,
            right,
            level,
            dominance,
        })
    }

    /// Creates a judgment from the signed widget encoding.
    ///
    /// Positive values favor the left criterion, negative values the right,
    /// and magnitude 1 in either direction means equal importance. Zero is
    /// rejected: it has no reciprocal on the ratio scale.
    pub fn from_signed(left: usize, right: usize, value: i8) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::ZeroMagnitude);
        }
        let magnitude = value.unsigned_abs();
        let level = ImportanceLevel::try_new(magnitude)?;
        let dominance = if magnitude == 1 {
            Dominance::Equal
        } else if value > 0 {
            Dominance::Left
        } else {
            Dominance::Right
        };
        Self::new(left, right, level, dominance)
    }

    /// Index of the lower-indexed criterion.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Index of the higher-indexed criterion.
    pub fn right(&self) -> usize {
        self.right
    }

    /// The selected importance level.
    pub fn level(&self) -> ImportanceLevel {
        self.level
    }

    /// Which side dominates.
    pub fn dominance(&self) -> Dominance {
        self.dominance
    }

    /// The crisp matrix entry for cell (left, right).
    pub fn crisp_value(&self) -> f64 {
        match self.dominance {
            Dominance::Equal => 1.0,
            Dominance::Left => self.level.crisp(),
            Dominance::Right => 1.0 / self.level.crisp(),
        }
    }

    /// The fuzzy matrix entry for cell (left, right).
    pub fn fuzzy_value(&self) -> TriangularFuzzyNumber {
        match self.dominance {
            Dominance::Equal => TriangularFuzzyNumber::IDENTITY,
            Dominance::Left => self.level.fuzzy(),
            Dominance::Right => self.level.fuzzy_reciprocal(),
        }
    }
}

/// An ordered criteria list with exactly one judgment per unordered pair.
///
/// Construction validates completeness and well-formedness; downstream
/// matrix and weight computation cannot be reached with a partial or
/// malformed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentSet {
    criteria: Vec<String>,
    judgments: Vec<Judgment>,
}

impl JudgmentSet {
    /// Creates a validated judgment set.
    ///
    /// Requires non-empty, non-blank criterion labels, every judgment index
    /// in range, no duplicate pairs, and one judgment for each of the
    /// n(n-1)/2 unordered pairs.
    pub fn new(criteria: Vec<String>, judgments: Vec<Judgment>) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        for label in &criteria {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field("criteria label"));
            }
        }

        let n = criteria.len();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for judgment in &judgments {
            if judgment.right() >= n {
                return Err(ValidationError::IndexOutOfRange {
                    index: judgment.right(),
                    count: n,
                });
            }
            if !seen.insert((judgment.left(), judgment.right())) {
                return Err(ValidationError::DuplicateJudgment {
                    left: judgment.left(),
                    right: judgment.right(),
                });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if !seen.contains(&(i, j)) {
                    return Err(ValidationError::MissingJudgment { left: i, right: j });
                }
            }
        }

        Ok(Self {
            criteria,
            judgments,
        })
    }

    /// The ordered criterion labels.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// The validated judgments, one per unordered pair.
    pub fn judgments(&self) -> &[Judgment] {
        &self.judgments
    }
}
