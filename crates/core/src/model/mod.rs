mod answer;
mod ids;
mod question;
mod summary;

pub use answer::UserAnswer;
pub use ids::{ParseIdError, QuestionId};
pub use question::{Difficulty, ParseDifficultyError, Question, QuestionError};
pub use summary::{QuizSummary, SummaryError};
