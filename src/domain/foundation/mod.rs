//! Foundation Module - shared value objects and error types.

mod errors;

pub use errors::{NumericError, ValidationError};
