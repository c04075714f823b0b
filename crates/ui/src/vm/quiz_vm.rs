use quiz_core::model::{Difficulty, QuizSummary};
use quiz_core::session::{AdvanceOutcome, QuizSession};
use services::{QuizLoopService, QuizStartError};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Advance,
    Retreat,
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
}

/// Display-facing wrapper over the quiz session.
///
/// All transitions are synchronous; the view funnels user actions and timer
/// ticks through the same dispatch path, so this never needs interior
/// locking.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.text())
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.session
            .current_question()
            .map(|q| q.options())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.category())
    }

    #[must_use]
    pub fn difficulty_label(&self) -> Option<&'static str> {
        self.session
            .current_question()
            .map(|q| q.difficulty().label())
    }

    /// The tentative choice, empty when nothing is selected yet.
    #[must_use]
    pub fn selected(&self) -> &str {
        self.session.selected_answer()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.session.selected_answer().is_empty()
    }

    /// 1-based position for display.
    #[must_use]
    pub fn current_number(&self) -> usize {
        self.session.current_index() + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.total_questions()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining()
    }

    #[must_use]
    pub fn is_first_question(&self) -> bool {
        self.session.current_index() == 0
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session.is_last_question()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn select(&mut self, choice: impl Into<String>) {
        self.session.select_answer(choice);
    }

    pub fn advance(&mut self) -> QuizOutcome {
        match self.session.advance() {
            AdvanceOutcome::Continued => QuizOutcome::Continue,
            AdvanceOutcome::Completed => QuizOutcome::Completed,
        }
    }

    pub fn retreat(&mut self) {
        self.session.retreat();
    }

    /// One countdown second. `Some` when the tick committed the current
    /// question (timeout-advance), `None` otherwise.
    pub fn tick(&mut self) -> Option<QuizOutcome> {
        self.session.tick().map(|outcome| match outcome {
            AdvanceOutcome::Continued => QuizOutcome::Continue,
            AdvanceOutcome::Completed => QuizOutcome::Completed,
        })
    }

    /// The one-shot results payload; `Some` exactly once the run completed.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.summary()
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuestions` when no source produced questions.
/// Returns `ViewError::Unknown` for other startup failures.
pub async fn start_quiz(
    quiz_loop: &QuizLoopService,
    difficulty: Difficulty,
) -> Result<QuizVm, ViewError> {
    let session = match quiz_loop.start_quiz(difficulty).await {
        Ok(session) => session,
        Err(QuizStartError::Quiz(_)) => return Err(ViewError::EmptyQuestions),
        Err(QuizStartError::Fallback(services::FallbackError::Empty)) => {
            return Err(ViewError::EmptyQuestions);
        }
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(QuizVm::new(session))
}
