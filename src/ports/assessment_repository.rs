//! Assessment repository port.
//!
//! Sessions live for the lifetime of the process only; there is no
//! cross-run persistence.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Repository port for `AssessmentSession` aggregates.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &AssessmentId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the session doesn't exist
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
