//! Assessment module - one questionnaire run from start to profile.
//!
//! The session aggregate replaces any ambient state: it is created by
//! sampling a bank, mutated by option selection and navigation, and frozen
//! once the profile is assembled.

mod answer;
mod errors;
mod session;

pub use answer::{Answer, QuestionTiming};
pub use errors::AssessmentError;
pub use session::{Advance, AssessmentSession};
