//! Comparison scale - ordinal importance levels with crisp and fuzzy lookups.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::tfn::TriangularFuzzyNumber;

/// Saaty importance level: 1 (equal) to 9 (extreme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportanceLevel(u8);

impl ImportanceLevel {
    /// Equal importance.
    pub const EQUAL: Self = Self(1);

    /// Extreme importance.
    pub const EXTREME: Self = Self(9);

    /// Creates an ImportanceLevel, returning error if outside 1..=9.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=9).contains(&value) {
            return Err(ValidationError::out_of_range(
                "importance_level",
                1,
                9,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric level.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the descriptive label for this level.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Equal importance",
            2 => "Between equal and moderate",
            3 => "Moderate importance",
            4 => "Between moderate and strong",
            5 => "Strong importance",
            6 => "Between strong and very strong",
            7 => "Very strong importance",
            8 => "Between very strong and extreme",
            // try_new bounds the value to 1..=9
            _ => "Extreme importance",
        }
    }

    /// The level as a crisp ratio-scale value.
    pub fn crisp(&self) -> f64 {
        f64::from(self.0)
    }

    /// The level as a triangular fuzzy number from the scale table.
    pub fn fuzzy(&self) -> TriangularFuzzyNumber {
        FUZZY_SCALE[usize::from(self.0) - 1]
    }

    /// The fuzzy reciprocal of this level.
    pub fn fuzzy_reciprocal(&self) -> TriangularFuzzyNumber {
        FUZZY_RECIPROCAL[usize::from(self.0) - 1]
    }
}

impl fmt::Display for ImportanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a pairwise comparison dominates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dominance {
    /// The lower-indexed (left) criterion is more important.
    Left,
    /// The higher-indexed (right) criterion is more important.
    Right,
    /// Both criteria are equally important.
    #[default]
    Equal,
}

/// The triangular fuzzy scale, one TFN per importance level 1..=9.
///
/// Level 1 carries a spread toward 3: a deliberate "equal importance" with
/// directional uncertainty. An equal judgment (no dominant side) bypasses
/// the table and uses the exact identity (1, 1, 1) in both directions.
static FUZZY_SCALE: [TriangularFuzzyNumber; 9] = [
    TriangularFuzzyNumber::from_parts(1.0, 1.0, 3.0),
    TriangularFuzzyNumber::from_parts(1.0, 2.0, 3.0),
    TriangularFuzzyNumber::from_parts(1.0, 3.0, 5.0),
    TriangularFuzzyNumber::from_parts(3.0, 4.0, 5.0),
    TriangularFuzzyNumber::from_parts(3.0, 5.0, 7.0),
    TriangularFuzzyNumber::from_parts(5.0, 6.0, 7.0),
    TriangularFuzzyNumber::from_parts(5.0, 7.0, 9.0),
    TriangularFuzzyNumber::from_parts(7.0, 8.0, 9.0),
    TriangularFuzzyNumber::from_parts(7.0, 9.0, 9.0),
];

/// Reciprocals of the fuzzy scale, derived once from `FUZZY_SCALE`.
static FUZZY_RECIPROCAL: Lazy<[TriangularFuzzyNumber; 9]> = Lazy::new(|| {
    let mut table = [TriangularFuzzyNumber::IDENTITY; 9];
    for (slot, tfn) in table.iter_mut().zip(FUZZY_SCALE.iter()) {
        *slot = tfn.reciprocal();
    }
    table
});
