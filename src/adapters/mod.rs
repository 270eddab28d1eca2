//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `question_bank` - loads the bank from a JSON file
//! - `storage` - in-memory assessment repository
//! - `http` - axum REST API

pub mod http;
pub mod question_bank;
pub mod storage;

pub use question_bank::JsonFileQuestionBank;
pub use storage::InMemoryAssessmentRepository;
