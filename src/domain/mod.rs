//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `questionnaire` - Dimensions, markers, the question bank and sampler
//! - `scoring` - Age adjustment, aggregation, classification, probabilities
//! - `assessment` - The session aggregate driving one questionnaire run
//! - `profile` - Profile assembly and derived interpretation

pub mod assessment;
pub mod foundation;
pub mod profile;
pub mod questionnaire;
pub mod scoring;
