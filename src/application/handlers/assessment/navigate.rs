//! NavigateHandler - Command handler for moving between questions.
//!
//! Moving forward past the last answered question completes the run.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use super::load_session;
use crate::domain::assessment::{Advance, AssessmentSession};
use crate::domain::foundation::{AssessmentId, DomainError, Timestamp};
use crate::ports::AssessmentRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct NavigateCommand {
    pub assessment_id: AssessmentId,
    pub direction: NavigationDirection,
}

#[derive(Debug, Clone)]
pub struct NavigateResult {
    pub session: AssessmentSession,
    /// True when this move completed the assessment.
    pub completed: bool,
}

/// Handler for question navigation.
pub struct NavigateHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl NavigateHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: NavigateCommand) -> Result<NavigateResult, DomainError> {
        let mut session = load_session(self.repository.as_ref(), &cmd.assessment_id).await?;
        let now = Timestamp::now();

        let moved = match cmd.direction {
            NavigationDirection::Previous => session.previous(now).map(|_| false),
            NavigationDirection::Next => match session.next(now) {
                Ok(Advance::Moved(_)) => Ok(false),
                Ok(Advance::ReadyToComplete) => session.complete().map(|_| true),
                Err(err) => Err(err),
            },
        };
        let completed = moved.map_err(|err| {
            warn!(
                assessment_id = %cmd.assessment_id,
                direction = ?cmd.direction,
                error = %err,
                "Navigation rejected"
            );
            err
        })?;

        self.repository.save(&session).await?;

        Ok(NavigateResult { session, completed })
    }
}
