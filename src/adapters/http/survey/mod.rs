//! Survey HTTP adapter - REST API for survey evaluation and submission.
//!
//! Provides endpoints for:
//! - Health probing
//! - Evaluating a judgment set without persisting anything
//! - Submitting a completed survey response

pub mod dto;
pub mod handlers;
pub mod routes;

// Export DTOs for external use
pub use dto::*;

// Export handlers state and router
pub use handlers::SurveyAppState;
pub use routes::survey_router;
