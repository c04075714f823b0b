use async_trait::async_trait;

use quiz_core::model::{Difficulty, Question};

use crate::error::TriviaError;

/// A provider of display-ready quiz questions.
///
/// The live trivia API implements this; tests substitute fixed or failing
/// sources. A call is all-or-nothing: either the full requested batch comes
/// back normalized, or an error signals the source is unavailable.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch `amount` multiple-choice questions at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns `TriviaError` when the source cannot deliver; no partial
    /// results are ever returned.
    async fn fetch_questions(
        &self,
        amount: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, TriviaError>;
}
