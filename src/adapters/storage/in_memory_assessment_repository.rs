//! In-Memory Assessment Repository
//!
//! Holds in-flight assessment sessions for the lifetime of the process.
//! Sessions that go unsaved for longer than the idle TTL are dropped on
//! the next write.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::AssessmentRepository;

/// Idle lifetime used by [`InMemoryAssessmentRepository::new`].
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct StoredSession {
    session: AssessmentSession,
    saved_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct InMemoryAssessmentRepository {
    sessions: Arc<RwLock<HashMap<AssessmentId, StoredSession>>>,
    idle_ttl_ms: u64,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl_ms: u64::try_from(idle_ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    async fn save_at(&self, session: &AssessmentSession, now: Timestamp) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, stored| now.millis_since(&stored.saved_at) < self.idle_ttl_ms);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Idle assessments evicted");
        }

        if let Some(stored) = sessions.get(session.id()) {
            if stored.session.revision() >= session.revision() {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Assessment {} was changed by another request", session.id()),
                )
                .with_detail("stored_revision", stored.session.revision().to_string())
                .with_detail("revision", session.revision().to_string()));
            }
        }

        sessions.insert(
            *session.id(),
            StoredSession {
                session: session.clone(),
                saved_at: now,
            },
        );
        Ok(())
    }
}

impl Default for InMemoryAssessmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    /// Rejects a write whose revision is not newer than the stored one.
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        self.save_at(session, Timestamp::now()).await
    }

    async fn find(&self, id: &AssessmentId) -> Result<Option<AssessmentSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).map(|stored| stored.session.clone()))
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment not found: {}", id),
            )
        })
    }
}
