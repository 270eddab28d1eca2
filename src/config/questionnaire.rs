//! Questionnaire configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where the question bank lives, how sessions are sampled, and how long
/// idle sessions are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireConfig {
    /// Path to the `{ "questions": [...] }` JSON bank
    #[serde(default = "default_bank_path")]
    pub bank_path: PathBuf,

    /// Fixed sampling seed; random per process when unset
    pub seed: Option<u64>,

    /// Sessions not saved for this many seconds are evicted
    #[serde(default = "default_session_idle_ttl")]
    pub session_idle_ttl_secs: u64,
}

impl QuestionnaireConfig {
    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// Validate questionnaire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bank_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("questionnaire.bank_path"));
        }
        if self.session_idle_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            bank_path: default_bank_path(),
            seed: None,
            session_idle_ttl_secs: default_session_idle_ttl(),
        }
    }
}

fn default_bank_path() -> PathBuf {
    PathBuf::from("data/questions.json")
}

fn default_session_idle_ttl() -> u64 {
    60 * 60
}
