use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Question, QuizSummary, UserAnswer};
use crate::time::Clock;

/// Seconds granted per question before the countdown commits it.
pub const QUESTION_TIME_LIMIT: u32 = 30;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for session")]
    Empty,
}

/// Result of committing the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The cursor moved to the next question.
    Continued,
    /// The last question was committed; the session is complete.
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one quiz run.
///
/// Owns a fixed, ordered question sequence and steps a cursor through it.
/// The tentative choice for the current question can be changed any number
/// of times; it is only finalized into the answer log when the session
/// advances past the question. The countdown is driven externally: the
/// owner calls [`QuizSession::tick`] once per elapsed second.
///
/// All operations are synchronous and run to completion; the caller is
/// responsible for serializing timer ticks and user actions through the
/// same path.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    tentative: String,
    // At most one entry per question position. A retreat leaves entries
    // beyond the cursor in place; re-advancing replaces them by position.
    answers: Vec<UserAnswer>,
    time_remaining: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    clock: Clock,
}

impl QuizSession {
    /// Create a session over the given questions, cursor at the first one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let clock = Clock::default_clock();
        Ok(Self {
            questions,
            current: 0,
            tentative: String::new(),
            answers: Vec::new(),
            time_remaining: QUESTION_TIME_LIMIT,
            started_at: clock.now(),
            completed_at: None,
            clock,
        })
    }

    /// Replace the session clock (fixed clocks make timestamps deterministic).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.started_at = clock.now();
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The tentative (not yet committed) choice for the current question.
    /// Empty means nothing is selected.
    #[must_use]
    pub fn selected_answer(&self) -> &str {
        &self.tentative
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    /// Number of questions with a finalized answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Record `choice` as the tentative answer for the current question,
    /// overwriting any previous choice. Never advances, never touches the
    /// answer log. No-op once the session is complete.
    pub fn select_answer(&mut self, choice: impl Into<String>) {
        if self.is_complete() {
            return;
        }
        self.tentative = choice.into();
    }

    /// Commit the tentative choice (empty = explicitly unanswered, scored
    /// incorrect) for the current question and move on.
    ///
    /// The log is written by position: re-advancing over a question visited
    /// via [`QuizSession::retreat`] replaces its entry instead of appending
    /// a duplicate. On the last question the session completes and the
    /// countdown is forced to zero. No-op once complete.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Completed;
        }

        let question = &self.questions[self.current];
        let answer = UserAnswer::new(
            question.id(),
            std::mem::take(&mut self.tentative),
            question.correct_answer(),
        );
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = answer;
        } else {
            self.answers.push(answer);
        }

        if self.is_last_question() {
            // Clamp so the summary's time-range invariant holds even if the
            // wall clock stepped backwards mid-session.
            self.completed_at = Some(self.clock.now().max(self.started_at));
            self.time_remaining = 0;
            return AdvanceOutcome::Completed;
        }

        self.current += 1;
        self.time_remaining = QUESTION_TIME_LIMIT;
        self.restore_tentative();
        AdvanceOutcome::Continued
    }

    /// Step back to the previous question. No-op at the first question or
    /// once complete. The countdown resets and the previously committed
    /// answer (always present on the backward path) becomes the tentative
    /// choice again; the log entry for the question being left stays put.
    pub fn retreat(&mut self) {
        if self.current == 0 || self.is_complete() {
            return;
        }

        self.current -= 1;
        self.time_remaining = QUESTION_TIME_LIMIT;
        self.restore_tentative();
    }

    /// One elapsed second of the external countdown. Ignored unless the
    /// session is active with time left. Reaching zero commits the current
    /// question exactly once, identically to a manual [`QuizSession::advance`].
    pub fn tick(&mut self) -> Option<AdvanceOutcome> {
        if self.is_complete() || self.time_remaining == 0 {
            return None;
        }

        self.time_remaining -= 1;
        if self.time_remaining == 0 {
            return Some(self.advance());
        }
        None
    }

    /// Count of correct answers committed so far. Meaningful once complete.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct).count()
    }

    /// The one-shot results payload. `Some` exactly when the session is
    /// complete; by construction the summary invariants hold at that point.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        let completed_at = self.completed_at?;
        QuizSummary::from_answers(
            self.answers.clone(),
            self.questions.len(),
            self.started_at,
            completed_at,
        )
        .ok()
    }

    // Entering an already-answered position (either direction) restores its
    // committed answer as the tentative choice, so a pass-through advance
    // cannot silently blank it. Never-answered positions start clear.
    fn restore_tentative(&mut self) {
        self.tentative = self
            .answers
            .get(self.current)
            .map(|answer| answer.selected.clone())
            .unwrap_or_default();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionId};
    use crate::time::fixed_clock;

    fn build_question(id: usize, correct: &str, others: &[&str]) -> Question {
        let mut options: Vec<String> = others.iter().map(|o| (*o).to_string()).collect();
        options.insert(id % (others.len() + 1), correct.to_string());
        Question::new(
            QuestionId::new(id),
            format!("Question {id}?"),
            options,
            correct,
            "General Knowledge",
            Difficulty::Medium,
        )
        .unwrap()
    }

    fn two_question_session() -> QuizSession {
        let questions = vec![
            build_question(0, "Paris", &["Berlin", "Madrid", "Rome"]),
            build_question(1, "42", &["7", "13", "99"]),
        ];
        QuizSession::new(questions).unwrap().with_clock(fixed_clock())
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn selecting_never_advances() {
        let mut session = two_question_session();
        session.select_answer("Paris");

        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.selected_answer(), "Paris");
    }

    #[test]
    fn full_run_scores_correct_answers() {
        let mut session = two_question_session();

        session.select_answer("Paris");
        assert_eq!(session.advance(), AdvanceOutcome::Continued);
        session.select_answer("7");
        assert_eq!(session.advance(), AdvanceOutcome::Completed);

        assert!(session.is_complete());
        assert_eq!(session.score(), 1);
        assert_eq!(session.time_remaining(), 0);

        let answers = session.answers();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].question_id, QuestionId::new(0));
        assert_eq!(answers[0].selected, "Paris");
        assert!(answers[0].is_correct);
        assert_eq!(answers[1].selected, "7");
        assert!(!answers[1].is_correct);
        assert_eq!(answers[1].correct_answer, "42");
    }

    #[test]
    fn advancing_without_selection_records_unanswered() {
        let questions = vec![build_question(0, "Paris", &["Berlin"])];
        let mut session = QuizSession::new(questions).unwrap().with_clock(fixed_clock());

        assert_eq!(session.advance(), AdvanceOutcome::Completed);

        assert!(session.is_complete());
        assert_eq!(session.score(), 0);
        assert!(session.answers()[0].is_unanswered());
        assert!(!session.answers()[0].is_correct);
    }

    #[test]
    fn answer_log_tracks_cursor_on_forward_path() {
        let mut session = two_question_session();
        assert_eq!(session.answered_count(), session.current_index());

        session.select_answer("Paris");
        session.advance();
        assert_eq!(session.answered_count(), session.current_index());

        session.advance();
        assert_eq!(session.answered_count(), session.total_questions());
    }

    #[test]
    fn retreat_restores_committed_answer_and_resets_timer() {
        let mut session = two_question_session();
        session.select_answer("Berlin");
        session.advance();
        for _ in 0..5 {
            session.tick();
        }
        assert_eq!(session.time_remaining(), QUESTION_TIME_LIMIT - 5);

        session.retreat();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_answer(), "Berlin");
        assert_eq!(session.time_remaining(), QUESTION_TIME_LIMIT);
        // The log entry for the question we left stays.
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn re_advancing_after_retreat_replaces_by_position() {
        let mut session = two_question_session();
        session.select_answer("Berlin");
        session.advance();

        session.retreat();
        session.select_answer("Paris");
        session.advance();

        let q0_entries: Vec<_> = session
            .answers()
            .iter()
            .filter(|answer| answer.question_id == QuestionId::new(0))
            .collect();
        assert_eq!(q0_entries.len(), 1);
        assert_eq!(q0_entries[0].selected, "Paris");
        assert!(q0_entries[0].is_correct);
    }

    #[test]
    fn forward_revisit_restores_committed_answer() {
        let questions = vec![
            build_question(0, "Paris", &["Berlin"]),
            build_question(1, "42", &["7"]),
            build_question(2, "Blue", &["Red"]),
        ];
        let mut session = QuizSession::new(questions).unwrap().with_clock(fixed_clock());

        session.select_answer("Paris");
        session.advance();

        // Q1 was never committed, so nothing to restore yet.
        assert_eq!(session.selected_answer(), "");

        session.select_answer("42");
        session.advance();

        session.retreat();
        session.retreat();
        assert_eq!(session.selected_answer(), "Paris");

        // A pass-through advance over the committed Q1 sees its answer and
        // re-commits it unchanged.
        session.advance();
        assert_eq!(session.selected_answer(), "42");
        session.advance();

        assert_eq!(session.current_index(), 2);
        assert_eq!(session.answers()[1].selected, "42");
        assert!(session.answers()[1].is_correct);
    }

    #[test]
    fn retreat_at_first_question_is_idempotent() {
        let mut session = two_question_session();
        session.select_answer("Paris");

        session.retreat();
        session.retreat();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_answer(), "Paris");
        assert_eq!(session.time_remaining(), QUESTION_TIME_LIMIT);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn countdown_reaching_zero_commits_once() {
        let questions = vec![build_question(0, "Paris", &["Berlin"])];
        let mut session = QuizSession::new(questions).unwrap().with_clock(fixed_clock());

        let mut outcome = None;
        for _ in 0..QUESTION_TIME_LIMIT {
            outcome = session.tick();
        }

        assert_eq!(outcome, Some(AdvanceOutcome::Completed));
        assert!(session.is_complete());
        assert_eq!(session.answers().len(), 1);
        assert!(session.answers()[0].is_unanswered());

        // Further ticks are ignored.
        assert_eq!(session.tick(), None);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn timeout_advances_mid_session_with_tentative_choice() {
        let mut session = two_question_session();
        session.select_answer("Paris");

        let mut outcome = None;
        for _ in 0..QUESTION_TIME_LIMIT {
            outcome = session.tick();
        }

        assert_eq!(outcome, Some(AdvanceOutcome::Continued));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.time_remaining(), QUESTION_TIME_LIMIT);
        assert_eq!(session.answers()[0].selected, "Paris");
    }

    #[test]
    fn operations_are_inert_once_complete() {
        let mut session = two_question_session();
        session.advance();
        session.advance();
        assert!(session.is_complete());

        let snapshot = session.answers().to_vec();
        session.select_answer("Paris");
        session.retreat();
        assert_eq!(session.advance(), AdvanceOutcome::Completed);
        assert_eq!(session.tick(), None);

        assert_eq!(session.answers(), snapshot.as_slice());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn score_never_exceeds_question_count() {
        let mut session = two_question_session();
        session.select_answer("Paris");
        session.advance();
        session.select_answer("42");
        session.advance();

        assert!(session.score() <= session.total_questions());
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn summary_is_present_exactly_on_completion() {
        let mut session = two_question_session();
        assert!(session.summary().is_none());

        session.select_answer("Paris");
        session.advance();
        assert!(session.summary().is_none());

        session.advance();
        let summary = session.summary().expect("complete session has a summary");
        assert_eq!(summary.score(), 1);
        assert_eq!(summary.total_questions(), 2);
        assert_eq!(summary.answers().len(), 2);
    }
}
