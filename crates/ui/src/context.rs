use std::sync::{Arc, Mutex};

use quiz_core::model::{Difficulty, QuizSummary};
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn default_difficulty(&self) -> Difficulty;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    default_difficulty: Difficulty,

    // One-shot handoff from the quiz view to the results view. Publishing
    // overwrites; taking empties the slot, so a direct navigation to the
    // results route finds nothing and redirects.
    results: Arc<Mutex<Option<QuizSummary>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            default_difficulty: app.default_difficulty(),
            results: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn default_difficulty(&self) -> Difficulty {
        self.default_difficulty
    }

    /// Hand a finished quiz's results to whoever visits the results route
    /// next. Replaces any unclaimed payload.
    pub fn publish_results(&self, summary: QuizSummary) {
        if let Ok(mut slot) = self.results.lock() {
            *slot = Some(summary);
        }
    }

    /// Claim the pending results payload, emptying the slot.
    #[must_use]
    pub fn take_results(&self) -> Option<QuizSummary> {
        self.results.lock().ok().and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
