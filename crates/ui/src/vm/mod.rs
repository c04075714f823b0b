mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm, start_quiz};
pub use results_vm::{AnswerRowVm, ResultsVm, map_results};
pub use time_fmt::{format_datetime, format_timer};
