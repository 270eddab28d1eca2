//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the DS2 profiling domain.

mod errors;
mod ids;
mod rounding;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use rounding::round_to;
pub use timestamp::Timestamp;
