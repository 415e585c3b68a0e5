//! HTTP adapters - REST API implementations.

pub mod survey;

// Re-export key types for convenience
pub use survey::survey_router;
pub use survey::SurveyAppState;
