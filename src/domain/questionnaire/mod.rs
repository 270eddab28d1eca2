//! Questionnaire module - question bank and per-session sampling.
//!
//! A bank maps each marker to one or more interchangeable variants.
//! Every session draws exactly one variant per marker.

mod bank;
mod marker;
mod question;
mod sampler;

pub use bank::{QuestionBank, QuestionBankError, QuestionBankFile};
pub use marker::{Dimension, Marker, MarkerBand};
pub use question::{Question, QuestionId, QuestionOption};
pub use sampler::select_session_questions;

#[cfg(test)]
pub(crate) use bank::test_support;
