use std::sync::Arc;

use quiz_core::model::Difficulty;
use quiz_core::session::QuizSession;
use quiz_core::Clock;

use crate::error::QuizStartError;
use crate::fallback;
use crate::source::QuestionSource;

const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Orchestrates quiz startup: live fetch, fallback substitution, session
/// construction.
///
/// Holds no per-quiz state; every [`QuizLoopService::start_quiz`] call
/// produces a fresh, independent session, so a response arriving for an
/// abandoned call has nothing it could overwrite. Restart is just another
/// call.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    question_count: u32,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            source,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: u32) -> Self {
        self.question_count = question_count;
        self
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Start a new quiz at the given difficulty.
    ///
    /// A live-source failure is an internal recovery point, not an error:
    /// the bundled fallback set is substituted and the session starts as
    /// usual. Only when the fallback itself is unusable does this fail.
    ///
    /// # Errors
    ///
    /// Returns `QuizStartError` when both the live source and the bundled
    /// set are unavailable, or the resulting question list is empty. The
    /// caller recovers by calling `start_quiz` again.
    pub async fn start_quiz(&self, difficulty: Difficulty) -> Result<QuizSession, QuizStartError> {
        let questions = match self
            .source
            .fetch_questions(self.question_count, difficulty)
            .await
        {
            Ok(questions) => questions,
            Err(err) => {
                tracing::warn!(error = %err, "live question source unavailable, using bundled set");
                fallback::fallback_questions()?
            }
        };

        let session = QuizSession::new(questions)?.with_clock(self.clock);
        Ok(session)
    }
}
