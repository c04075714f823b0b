use thiserror::Error;

use crate::model::{QuestionError, SummaryError};
use crate::session::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
