//! Assessment session aggregate.
//!
//! Owns everything a single run of the questionnaire accumulates: the
//! sampled questions, the current position, one answer and one timing per
//! question, and the finished profile once completed.

use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info};

use super::{Answer, AssessmentError, QuestionTiming};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::profile::{assemble_profile, Profile, ProfileInput};
use crate::domain::questionnaire::{select_session_questions, Question, QuestionBank, QuestionId};

/// Result of moving forward through the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// The last question is answered; the session can be completed.
    ReadyToComplete,
}

/// One questionnaire run.
///
/// # Invariants
///
/// - `questions` holds exactly one variant per marker of the source bank
/// - `current_index < questions.len()`
/// - answers and timings are keyed only by ids in `questions`
/// - a timing, once recorded, is never replaced
/// - a completed session accepts no further answers or navigation
/// - `revision` grows by one with every accepted change
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: AssessmentId,
    age: Option<u32>,
    questions: Vec<Question>,
    current_index: usize,
    answers: HashMap<QuestionId, Answer>,
    timings: HashMap<QuestionId, QuestionTiming>,
    current_started_at: Option<Timestamp>,
    started_at: Timestamp,
    profile: Option<Profile>,
    revision: u64,
}

impl AssessmentSession {
    /// Samples the session questions and shows the first one.
    ///
    /// # Errors
    ///
    /// - `EmptyBank` if the bank yields no questions
    pub fn start<R: Rng>(
        bank: &QuestionBank,
        age: Option<u32>,
        rng: &mut R,
        now: Timestamp,
    ) -> Result<Self, AssessmentError> {
        let questions = select_session_questions(bank, rng)
            .ok()
            .filter(|questions| !questions.is_empty())
            .ok_or(AssessmentError::EmptyBank)?;

        let mut session = Self {
            id: AssessmentId::new(),
            age,
            questions,
            current_index: 0,
            answers: HashMap::new(),
            timings: HashMap::new(),
            current_started_at: None,
            started_at: now,
            profile: None,
            revision: 0,
        };
        session.show_current(now);

        info!(
            assessment_id = %session.id,
            questions = session.questions.len(),
            age = ?session.age,
            "Assessment started"
        );
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently shown.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn answer(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    pub fn answers(&self) -> &HashMap<QuestionId, Answer> {
        &self.answers
    }

    pub fn timing(&self, question_id: QuestionId) -> Option<&QuestionTiming> {
        self.timings.get(&question_id)
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Fraction of questions answered, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.answered_count() as f64 / self.questions.len() as f64
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Count of accepted changes since start. Stores use it to refuse
    /// writes based on an outdated copy.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the current question as shown at `now`; restarts its clock.
    pub fn show_current(&mut self, now: Timestamp) {
        self.current_started_at = Some(now);
    }

    /// Records the chosen option for `question_id`.
    ///
    /// The answer may be changed freely, but the timing captured on the
    /// first selection is kept.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` after completion
    /// - `UnknownQuestion` if the id is not in this session
    /// - `OptionOutOfRange` if the question has no such option
    pub fn select_option(
        &mut self,
        question_id: QuestionId,
        option_index: usize,
        now: Timestamp,
    ) -> Result<&Answer, AssessmentError> {
        self.ensure_open()?;

        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(AssessmentError::UnknownQuestion(question_id))?;
        let answer = Answer::for_option(question, option_index).ok_or(
            AssessmentError::OptionOutOfRange {
                question_id,
                option_index,
            },
        )?;

        if let Some(start) = self.current_started_at {
            self.timings
                .entry(question_id)
                .or_insert_with(|| QuestionTiming::between(start, now));
        }

        debug!(
            assessment_id = %self.id,
            question_id,
            option_index,
            score = answer.score,
            "Option selected"
        );

        self.answers.insert(question_id, answer);
        self.revision += 1;
        Ok(&self.answers[&question_id])
    }

    /// Moves to the next question, or reports that the run can be completed.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` after completion
    /// - `Unanswered` if the current question has no answer
    pub fn next(&mut self, now: Timestamp) -> Result<Advance, AssessmentError> {
        self.ensure_open()?;

        let current = self.current_question().id;
        if !self.answers.contains_key(&current) {
            return Err(AssessmentError::Unanswered(current));
        }

        self.revision += 1;
        if self.is_last() {
            return Ok(Advance::ReadyToComplete);
        }

        self.current_index += 1;
        self.show_current(now);
        Ok(Advance::Moved(self.current_index))
    }

    /// Moves back one question; stays put on the first.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` after completion
    pub fn previous(&mut self, now: Timestamp) -> Result<usize, AssessmentError> {
        self.ensure_open()?;

        if self.current_index > 0 {
            self.current_index -= 1;
            self.show_current(now);
        }
        self.revision += 1;
        Ok(self.current_index)
    }

    /// Scores the session and freezes it.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if called twice
    /// - `Unanswered` naming the first question without an answer
    pub fn complete(&mut self) -> Result<&Profile, AssessmentError> {
        self.ensure_open()?;

        if let Some(missing) = self
            .questions
            .iter()
            .find(|q| !self.answers.contains_key(&q.id))
        {
            return Err(AssessmentError::Unanswered(missing.id));
        }

        let profile = assemble_profile(ProfileInput {
            age: self.age,
            questions: &self.questions,
            answers: &self.answers,
            timings: &self.timings,
        });

        info!(
            assessment_id = %self.id,
            archetype = %profile.archetype,
            "Assessment completed"
        );

        self.current_started_at = None;
        self.revision += 1;
        Ok(&*self.profile.insert(profile))
    }

    fn ensure_open(&self) -> Result<(), AssessmentError> {
        if self.is_complete() {
            Err(AssessmentError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::test_support::small_bank;
    use crate::domain::questionnaire::Dimension;
    use crate::domain::scoring::Archetype;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(millis: i64) -> Timestamp {
        Timestamp::from_millis(millis).unwrap()
    }

    fn started(age: Option<u32>) -> AssessmentSession {
        let mut rng = StdRng::seed_from_u64(42);
        AssessmentSession::start(&small_bank(), age, &mut rng, at(0)).unwrap()
    }

    fn answer_all(session: &mut AssessmentSession, option_index: usize) {
        let mut clock = 0;
        loop {
            clock += 1_000;
            let id = session.current_question().id;
            session.select_option(id, option_index, at(clock)).unwrap();
            match session.next(at(clock)).unwrap() {
                Advance::Moved(_) => continue,
                Advance::ReadyToComplete => break,
            }
        }
    }

    #[test]
    fn start_samples_one_question_per_marker() {
        let session = started(None);
        assert_eq!(session.total_questions(), 4);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question().dimension, Dimension::Ami);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.progress(), 0.0);
        assert!(!session.is_complete());
    }

    #[test]
    fn selecting_unknown_question_is_rejected() {
        let mut session = started(None);
        let result = session.select_option(999, 0, at(10));
        assert_eq!(result.unwrap_err(), AssessmentError::UnknownQuestion(999));
    }

    #[test]
    fn selecting_missing_option_is_rejected() {
        let mut session = started(None);
        let id = session.current_question().id;
        let result = session.select_option(id, 3, at(10));
        assert_eq!(
            result.unwrap_err(),
            AssessmentError::OptionOutOfRange {
                question_id: id,
                option_index: 3
            }
        );
        assert!(session.timing(id).is_none());
    }

    #[test]
    fn first_selection_timing_wins() {
        let mut session = started(None);
        let id = session.current_question().id;

        session.select_option(id, 0, at(1_500)).unwrap();
        session.select_option(id, 2, at(9_000)).unwrap();

        let timing = session.timing(id).unwrap();
        assert_eq!(timing.duration_ms, 1_500);
        assert_eq!(timing.end, at(1_500));
        assert_eq!(session.answer(id).unwrap().option_index, 2);
        assert_eq!(session.answer(id).unwrap().score, 0.0);
    }

    #[test]
    fn revisiting_a_question_keeps_its_timing() {
        let mut session = started(None);
        let first = session.current_question().id;
        session.select_option(first, 0, at(2_000)).unwrap();
        session.next(at(2_000)).unwrap();
        session.previous(at(5_000)).unwrap();

        session.select_option(first, 1, at(7_000)).unwrap();

        assert_eq!(session.timing(first).unwrap().duration_ms, 2_000);
        assert_eq!(session.answer(first).unwrap().option_index, 1);
    }

    #[test]
    fn next_requires_answer() {
        let mut session = started(None);
        let id = session.current_question().id;
        assert_eq!(
            session.next(at(100)).unwrap_err(),
            AssessmentError::Unanswered(id)
        );
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn next_moves_forward_and_restarts_clock() {
        let mut session = started(None);
        let first = session.current_question().id;
        session.select_option(first, 0, at(1_000)).unwrap();

        assert_eq!(session.next(at(1_200)).unwrap(), Advance::Moved(1));

        let second = session.current_question().id;
        session.select_option(second, 0, at(1_700)).unwrap();
        assert_eq!(session.timing(second).unwrap().duration_ms, 500);
    }

    #[test]
    fn previous_stops_at_first_question() {
        let mut session = started(None);
        assert_eq!(session.previous(at(10)).unwrap(), 0);
        assert!(session.is_first());
    }

    #[test]
    fn progress_tracks_answered_questions() {
        let mut session = started(None);
        let id = session.current_question().id;
        session.select_option(id, 0, at(10)).unwrap();
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.progress(), 0.25);
    }

    #[test]
    fn next_on_last_answered_question_is_ready() {
        let mut session = started(None);
        answer_all(&mut session, 0);
        assert!(session.is_last());
        assert_eq!(session.answered_count(), 4);
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn complete_requires_every_answer() {
        let mut session = started(None);
        let first = session.questions()[0].id;
        session.select_option(first, 0, at(10)).unwrap();

        let missing = session.questions()[1].id;
        assert_eq!(
            session.complete().unwrap_err(),
            AssessmentError::Unanswered(missing)
        );
    }

    #[test]
    fn complete_assembles_profile() {
        let mut session = started(Some(30));
        answer_all(&mut session, 0);

        let profile = session.complete().unwrap().clone();

        assert_eq!(profile.ami, 10.0);
        assert_eq!(profile.cmi, 10.0);
        assert_eq!(profile.archetype, Archetype::DssIII);
        assert_eq!(profile.timing.questions.len(), 4);
        assert_eq!(profile.timing.total_ms, 4_000);
        assert_eq!(profile.age_adjustment.as_ref().map(|a| a.age), Some(30));
        assert!(session.is_complete());
    }

    #[test]
    fn accepted_changes_bump_revision() {
        let mut session = started(None);
        assert_eq!(session.revision(), 0);

        let id = session.current_question().id;
        session.select_option(id, 0, at(10)).unwrap();
        assert_eq!(session.revision(), 1);

        session.next(at(20)).unwrap();
        session.previous(at(30)).unwrap();
        assert_eq!(session.revision(), 3);
    }

    #[test]
    fn rejected_changes_keep_revision() {
        let mut session = started(None);
        session.select_option(999, 0, at(10)).unwrap_err();
        session.next(at(10)).unwrap_err();
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn completed_session_is_frozen() {
        let mut session = started(None);
        answer_all(&mut session, 2);
        session.complete().unwrap();

        let id = session.current_question().id;
        assert_eq!(
            session.select_option(id, 0, at(99)).unwrap_err(),
            AssessmentError::AlreadyCompleted
        );
        assert_eq!(
            session.next(at(99)).unwrap_err(),
            AssessmentError::AlreadyCompleted
        );
        assert_eq!(
            session.previous(at(99)).unwrap_err(),
            AssessmentError::AlreadyCompleted
        );
        assert_eq!(
            session.complete().unwrap_err(),
            AssessmentError::AlreadyCompleted
        );
    }
}
