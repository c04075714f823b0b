#![forbid(unsafe_code)]

pub mod error;
pub mod fallback;
pub mod quiz_loop;
pub mod source;
pub mod trivia_service;

pub use quiz_core::Clock;

pub use error::{FallbackError, QuizStartError, TriviaError};
pub use quiz_loop::QuizLoopService;
pub use source::QuestionSource;
pub use trivia_service::{TriviaConfig, TriviaService};
