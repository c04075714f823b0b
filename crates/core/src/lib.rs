#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use session::{AdvanceOutcome, QuizError, QuizSession, QUESTION_TIME_LIMIT};
pub use time::Clock;
