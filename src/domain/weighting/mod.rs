//! Weighting Module - the AHP / fuzzy-AHP computational core.
//!
//! Pure, synchronous, deterministic functions that turn a validated set of
//! pairwise judgments into criterion weights and consistency metrics.
//!
//! # Components
//!
//! - `TriangularFuzzyNumber` - validated (a, b, c) fuzzy magnitude
//! - `ImportanceLevel` / `Dominance` - the 1-9 comparison scale with crisp
//!   and fuzzy lookups
//! - `Judgment` / `JudgmentSet` - one comparison per unordered criterion
//!   pair, validated for completeness before anything downstream runs
//! - `ComparisonMatrix` / `FuzzyComparisonMatrix` - reciprocal positive
//!   matrices built from a judgment set
//! - `WeightEngine` - crisp row-mean and fuzzy extent-analysis weight
//!   derivation
//! - `ConsistencyEvaluator` - lambda_max, CI, CR, and the CR < 0.10 flag
//!
//! Data flows one-way: judgments -> matrix -> normalized matrix -> weights
//! -> consistency metrics. Every derived value is a fresh snapshot; nothing
//! is recomputed incrementally.

mod consistency;
mod judgment;
mod matrix;
mod scale;
mod tfn;
mod weights;

pub use consistency::{
    ConsistencyEvaluator, ConsistencyReport, LambdaMethod, CR_ACCEPTABLE_THRESHOLD, RANDOM_INDEX,
};
pub use judgment::{Judgment, JudgmentSet};
pub use matrix::{ComparisonMatrix, FuzzyComparisonMatrix, LabeledMatrix};
pub use scale::{Dominance, ImportanceLevel};
pub use tfn::TriangularFuzzyNumber;
pub use weights::{Defuzzifier, WeightEngine, WeightMethod, WeightVector, WEIGHT_SUM_TOLERANCE};
