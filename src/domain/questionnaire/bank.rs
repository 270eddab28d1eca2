//! Question bank: validated marker -> variants mapping.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::debug;

use super::{Dimension, Marker, Question, QuestionId};

/// Reasons a question bank is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuestionBankError {
    #[error("Question bank contains no questions")]
    Empty,

    #[error("Question {0} has a blank marker")]
    BlankMarker(QuestionId),

    #[error("Question {0} has no options")]
    NoOptions(QuestionId),

    #[error("Question {id} option {index} has score {score} outside [0, 1]")]
    ScoreOutOfRange {
        id: QuestionId,
        index: usize,
        score: f64,
    },

    #[error("Duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("Marker '{marker}' appears under both {first} and {second}")]
    MarkerDimensionConflict {
        marker: Marker,
        first: Dimension,
        second: Dimension,
    },
}

/// On-disk bank layout: `{ "questions": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBankFile {
    pub questions: Vec<Question>,
}

/// Variants grouped by marker.
///
/// # Invariants
///
/// - at least one marker, every marker has at least one variant
/// - each marker belongs to exactly one dimension
/// - question ids are unique, option scores lie in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    pools: BTreeMap<Marker, Vec<Question>>,
}

impl QuestionBank {
    /// Groups questions by marker, validating the bank invariants.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen_ids = HashSet::new();
        let mut pools: BTreeMap<Marker, Vec<Question>> = BTreeMap::new();

        for question in questions {
            Self::validate_question(&question)?;
            if !seen_ids.insert(question.id) {
                return Err(QuestionBankError::DuplicateId(question.id));
            }

            let variants = pools.entry(question.marker.clone()).or_default();
            if let Some(first) = variants.first() {
                if first.dimension != question.dimension {
                    return Err(QuestionBankError::MarkerDimensionConflict {
                        marker: question.marker.clone(),
                        first: first.dimension,
                        second: question.dimension,
                    });
                }
            }
            variants.push(question);
        }

        debug!(markers = pools.len(), "Question bank loaded");
        Ok(Self { pools })
    }

    fn validate_question(question: &Question) -> Result<(), QuestionBankError> {
        if question.marker.as_str().trim().is_empty() {
            return Err(QuestionBankError::BlankMarker(question.id));
        }
        if question.options.is_empty() {
            return Err(QuestionBankError::NoOptions(question.id));
        }
        for (index, option) in question.options.iter().enumerate() {
            if !(0.0..=1.0).contains(&option.score) {
                return Err(QuestionBankError::ScoreOutOfRange {
                    id: question.id,
                    index,
                    score: option.score,
                });
            }
        }
        Ok(())
    }

    /// Number of distinct markers (= questions per session).
    pub fn marker_count(&self) -> usize {
        self.pools.len()
    }

    /// Total number of question variants.
    pub fn question_count(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// Iterates markers with their variants in marker order.
    pub fn pools(&self) -> impl Iterator<Item = (&Marker, &[Question])> {
        self.pools.iter().map(|(m, v)| (m, v.as_slice()))
    }
}

impl TryFrom<QuestionBankFile> for QuestionBank {
    type Error = QuestionBankError;

    fn try_from(file: QuestionBankFile) -> Result<Self, Self::Error> {
        Self::from_questions(file.questions)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::questionnaire::QuestionOption;

    #[test]
    fn groups_variants_by_marker() {
        let bank = small_bank();
        assert_eq!(bank.marker_count(), 4);
        assert_eq!(bank.question_count(), 5);

        let sizes: Vec<(&str, usize)> = bank
            .pools()
            .map(|(marker, variants)| (marker.as_str(), variants.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![
                ("analogical_transfer", 1),
                ("boundary_checking", 1),
                ("first_principles", 2),
                ("paradox_tolerance", 1),
            ]
        );
    }

    #[test]
    fn empty_bank_rejected() {
        assert_eq!(
            QuestionBank::from_questions(vec![]),
            Err(QuestionBankError::Empty)
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = QuestionBank::from_questions(vec![
            question(1, Dimension::Ami, "first_principles"),
            question(1, Dimension::Ami, "boundary_checking"),
        ]);
        assert_eq!(result, Err(QuestionBankError::DuplicateId(1)));
    }

    #[test]
    fn marker_in_two_dimensions_rejected() {
        let result = QuestionBank::from_questions(vec![
            question(1, Dimension::Ami, "first_principles"),
            question(2, Dimension::Cmi, "first_principles"),
        ]);
        assert!(matches!(
            result,
            Err(QuestionBankError::MarkerDimensionConflict { .. })
        ));
    }

    #[test]
    fn out_of_range_score_rejected() {
        let mut q = question(1, Dimension::Ami, "first_principles");
        q.options.push(QuestionOption::new("Too much", 1.5));
        let result = QuestionBank::from_questions(vec![q]);
        assert!(matches!(
            result,
            Err(QuestionBankError::ScoreOutOfRange { id: 1, index: 3, .. })
        ));
    }

    #[test]
    fn question_without_options_rejected() {
        let mut q = question(9, Dimension::Cmi, "paradox_tolerance");
        q.options.clear();
        assert_eq!(
            QuestionBank::from_questions(vec![q]),
            Err(QuestionBankError::NoOptions(9))
        );
    }

    #[test]
    fn bank_file_converts() {
        let json = r#"{"questions": [
            {"id": 1, "dimension": "AMI", "marker": "first_principles", "text": "Q",
             "options": [{"text": "A", "score": 0.25}]}
        ]}"#;
        let file: QuestionBankFile = serde_json::from_str(json).unwrap();
        let bank = QuestionBank::try_from(file).unwrap();
        assert_eq!(bank.marker_count(), 1);
    }
}
