//! StartAssessmentHandler - Command handler for starting a questionnaire run.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::questionnaire::QuestionBank;
use crate::domain::scoring::parse_age;
use crate::ports::AssessmentRepository;

/// Command to start a new assessment.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand {
    /// Free-text age as entered; unparseable input means "no age".
    pub age: Option<String>,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub session: AssessmentSession,
}

/// Handler for starting assessments.
///
/// Owns the random source used for question sampling.
pub struct StartAssessmentHandler {
    bank: Arc<QuestionBank>,
    repository: Arc<dyn AssessmentRepository>,
    rng: Mutex<StdRng>,
}

impl StartAssessmentHandler {
    /// Creates a handler; a `seed` makes sampling reproducible.
    pub fn new(
        bank: Arc<QuestionBank>,
        repository: Arc<dyn AssessmentRepository>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(bank, repository, rng)
    }

    pub fn with_rng(
        bank: Arc<QuestionBank>,
        repository: Arc<dyn AssessmentRepository>,
        rng: StdRng,
    ) -> Self {
        Self {
            bank,
            repository,
            rng: Mutex::new(rng),
        }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, DomainError> {
        let age = cmd.age.as_deref().and_then(parse_age);

        let session = {
            let mut rng = self.rng.lock().await;
            AssessmentSession::start(&self.bank, age, &mut *rng, Timestamp::now())?
        };

        self.repository.save(&session).await?;

        info!(
            assessment_id = %session.id(),
            questions = session.total_questions(),
            "Assessment session stored"
        );
        Ok(StartAssessmentResult { session })
    }
}
