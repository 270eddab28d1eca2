//! Storage Adapters
//!
//! Implementations of the AssessmentRepository port.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryAssessmentRepository;
//!
//! let repository = Arc::new(InMemoryAssessmentRepository::new());
//! ```

mod in_memory_assessment_repository;

pub use in_memory_assessment_repository::{InMemoryAssessmentRepository, DEFAULT_IDLE_TTL};
