//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionBankSource` - loads the validated question bank
//! - `AssessmentRepository` - holds in-flight assessment sessions

mod assessment_repository;
mod question_bank_source;

pub use assessment_repository::AssessmentRepository;
pub use question_bank_source::{QuestionBankSource, QuestionBankSourceError};
