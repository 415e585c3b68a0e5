//! Triangular fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A triangular fuzzy number (a, b, c) with 0 < a <= b <= c.
///
/// Models an uncertain magnitude on the ratio scale: `b` is the most likely
/// value, `a` and `c` bound the support of the membership triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularFuzzyNumber {
    /// The multiplicative identity (1, 1, 1), used for equal importance and
    /// the matrix diagonal.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 1.0,
        c: 1.0,
    };

    /// Creates a TFN, rejecting non-finite, non-positive, or misordered
    /// components.
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self, ValidationError> {
        let well_formed =
            a.is_finite() && b.is_finite() && c.is_finite() && a > 0.0 && a <= b && b <= c;
        if !well_formed {
            return Err(ValidationError::MalformedTfn { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Constructs from components known to be ordered and positive.
    ///
    /// Callers must uphold 0 < a <= b <= c; used for the static scale table
    /// and for arithmetic that preserves the ordering.
    pub(crate) const fn from_parts(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Lower bound of the support.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The modal (most likely) value.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Upper bound of the support.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The fuzzy reciprocal: (a, b, c) -> (1/c, 1/b, 1/a).
    ///
    /// Positivity and ordering are preserved, so the result is always a
    /// valid TFN.
    pub fn reciprocal(&self) -> Self {
        Self {
            a: 1.0 / self.c,
            b: 1.0 / self.b,
            c: 1.0 / self.a,
        }
    }

    /// Component-wise product; ordering is preserved for positive operands.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a,
            b: self.b * other.b,
            c: self.c * other.c,
        }
    }

    /// Component-wise power; for positive components and any real exponent
    /// the ordering a <= b <= c is preserved.
    pub fn powf(&self, exponent: f64) -> Self {
        Self {
            a: self.a.powf(exponent),
            b: self.b.powf(exponent),
            c: self.c.powf(exponent),
        }
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}
