//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;
use quiz_core::session::QuizError;

/// Errors emitted by `TriviaService`.
///
/// Every variant means the live source is unavailable for this call; the
/// quiz loop recovers by substituting the bundled fallback set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriviaError {
    #[error("question count must be positive")]
    ZeroAmount,
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("trivia service answered with response code {0}")]
    ResponseCode(u8),
    #[error("trivia service returned no questions")]
    Empty,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted while loading the bundled fallback set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FallbackError {
    #[error("bundled question set is empty")]
    Empty,
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by `QuizLoopService` when a quiz cannot be started.
///
/// Reached only when the fallback path itself fails; a live-source failure
/// alone never surfaces here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizStartError {
    #[error(transparent)]
    Fallback(#[from] FallbackError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
