use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::answer::UserAnswer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("answer count ({answers}) does not match question count ({total})")]
    CountMismatch { answers: usize, total: usize },
}

/// One-shot results payload for a completed quiz.
///
/// Handed to the results view when the session reaches completion; the
/// session does not retain it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    answers: Vec<UserAnswer>,
    total_questions: usize,
    score: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the finalized answer log.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::CountMismatch` when the log does not cover
    /// every question, and `SummaryError::InvalidTimeRange` when
    /// `completed_at` is before `started_at`.
    pub fn from_answers(
        answers: Vec<UserAnswer>,
        total_questions: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if answers.len() != total_questions {
            return Err(SummaryError::CountMismatch {
                answers: answers.len(),
                total: total_questions,
            });
        }

        let score = answers.iter().filter(|answer| answer.is_correct).count();

        Ok(Self {
            answers,
            total_questions,
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Count of correct answers.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Score as a whole percentage, rounded to the nearest point.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let pct = (self.score as f64 / self.total_questions as f64) * 100.0;
        pct.round() as u32
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;
    use crate::time::fixed_now;

    fn answer(id: usize, selected: &str, correct: &str) -> UserAnswer {
        UserAnswer::new(QuestionId::new(id), selected, correct)
    }

    #[test]
    fn summary_scores_correct_answers() {
        let now = fixed_now();
        let answers = vec![
            answer(0, "Paris", "Paris"),
            answer(1, "7", "42"),
            answer(2, "", "Blue"),
        ];

        let summary = QuizSummary::from_answers(answers, 3, now, now).unwrap();

        assert_eq!(summary.score(), 1);
        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.percentage(), 33);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let now = fixed_now();
        let err =
            QuizSummary::from_answers(vec![answer(0, "a", "a")], 2, now, now).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::CountMismatch {
                answers: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn inverted_time_range_is_rejected() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(30);
        let err = QuizSummary::from_answers(Vec::new(), 0, now, earlier).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidTimeRange));
    }

    #[test]
    fn perfect_run_is_one_hundred_percent() {
        let now = fixed_now();
        let answers = vec![answer(0, "a", "a"), answer(1, "b", "b")];
        let summary = QuizSummary::from_answers(answers, 2, now, now).unwrap();
        assert_eq!(summary.percentage(), 100);
    }
}
