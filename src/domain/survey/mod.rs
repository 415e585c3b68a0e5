//! Survey Module - respondent profile and the persisted submission record.

mod respondent;
mod submission;

pub use respondent::{RespondentProfile, AGE_RANGES, FIELDS_OF_WORK, FIELD_OTHER};
pub use submission::{SubmissionRecord, WeightEntry};
