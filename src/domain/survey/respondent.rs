//! Respondent profile captured alongside the judgments.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Accepted age-range options.
pub const AGE_RANGES: &[&str] = &["18-24", "25-44", "45-64", "65-74", "75+"];

/// Accepted field-of-work options.
pub const FIELDS_OF_WORK: &[&str] = &[
    "Engineering",
    "Utilities",
    "Environment",
    "Information Technology",
    "Marketing",
    "Management",
    FIELD_OTHER,
];

/// The field-of-work option that requires a free-text specification.
pub const FIELD_OTHER: &str = "Other";

/// Who answered the survey, for downstream segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    /// One of `AGE_RANGES`.
    pub age_range: String,
    /// One of `FIELDS_OF_WORK`.
    pub field_of_work: String,
    /// Required when `field_of_work` is "Other".
    pub field_of_work_other: Option<String>,
    /// Optional usability feedback: items the respondent found hard to rate.
    pub difficulty_feedback: Option<String>,
    /// Optional improvement suggestions.
    pub suggestions: Option<String>,
}

impl RespondentProfile {
    /// Validates the profile against the fixed option lists.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !AGE_RANGES.contains(&self.age_range.as_str()) {
            return Err(ValidationError::invalid_format(
                "age_range",
                format!("'{}' is not an accepted age range", self.age_range),
            ));
        }
        if !FIELDS_OF_WORK.contains(&self.field_of_work.as_str()) {
            return Err(ValidationError::invalid_format(
                "field_of_work",
                format!("'{}' is not an accepted field of work", self.field_of_work),
            ));
        }
        if self.field_of_work == FIELD_OTHER {
            let specified = self
                .field_of_work_other
                .as_deref()
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false);
            if !specified {
                return Err(ValidationError::empty_field("field_of_work_other"));
            }
        }
        Ok(())
    }

    /// The effective field of work: the "Other" specification when present,
    /// the selected option otherwise.
    pub fn effective_field(&self) -> &str {
        if self.field_of_work == FIELD_OTHER {
            self.field_of_work_other
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(FIELD_OTHER)
        } else {
            &self.field_of_work
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: &str, field: &str) -> RespondentProfile {
        RespondentProfile {
            age_range: age.to_string(),
            field_of_work: field.to_string(),
            field_of_work_other: None,
            difficulty_feedback: None,
            suggestions: None,
        }
    }

    #[test]
    fn accepts_listed_options() {
        assert!(profile("25-44", "Engineering").validate().is_ok());
        assert!(profile("75+", "Environment").validate().is_ok());
    }

    #[test]
    fn rejects_unknown_age_range() {
        assert!(profile("20-30", "Engineering").validate().is_err());
    }

    #[test]
    fn rejects_unknown_field_of_work() {
        assert!(profile("25-44", "Astrology").validate().is_err());
    }

    #[test]
    fn other_field_requires_specification() {
        let mut p = profile("25-44", "Other");
        assert!(p.validate().is_err());

        p.field_of_work_other = Some("  ".to_string());
        assert!(p.validate().is_err());

        p.field_of_work_other = Some("Hydrology".to_string());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn effective_field_prefers_other_specification() {
        let mut p = profile("25-44", "Other");
        p.field_of_work_other = Some("Hydrology".to_string());
        assert_eq!(p.effective_field(), "Hydrology");

        let p = profile("25-44", "Management");
        assert_eq!(p.effective_field(), "Management");
    }
}
