use std::sync::Arc;

use async_trait::async_trait;

use quiz_core::model::{Difficulty, Question, QuestionId};
use quiz_core::session::AdvanceOutcome;
use quiz_core::time::fixed_clock;
use services::{QuestionSource, QuizLoopService, TriviaError};

struct FixedSource {
    questions: Vec<Question>,
}

#[async_trait]
impl QuestionSource for FixedSource {
    async fn fetch_questions(
        &self,
        _amount: u32,
        _difficulty: Difficulty,
    ) -> Result<Vec<Question>, TriviaError> {
        Ok(self.questions.clone())
    }
}

struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
    async fn fetch_questions(
        &self,
        _amount: u32,
        _difficulty: Difficulty,
    ) -> Result<Vec<Question>, TriviaError> {
        Err(TriviaError::ResponseCode(2))
    }
}

fn build_question(id: usize, text: &str, correct: &str, others: &[&str]) -> Question {
    let mut options: Vec<String> = others.iter().map(|o| (*o).to_string()).collect();
    options.push(correct.to_string());
    Question::new(
        QuestionId::new(id),
        text,
        options,
        correct,
        "General Knowledge",
        Difficulty::Medium,
    )
    .unwrap()
}

#[tokio::test]
async fn quiz_runs_to_completion_with_a_live_source() {
    let source = FixedSource {
        questions: vec![
            build_question(0, "Capital of France?", "Paris", &["Berlin", "Rome"]),
            build_question(1, "The answer to everything?", "42", &["7", "13"]),
        ],
    };
    let loop_svc = QuizLoopService::new(fixed_clock(), Arc::new(source));

    let mut session = loop_svc.start_quiz(Difficulty::Medium).await.unwrap();

    session.select_answer("Paris");
    assert_eq!(session.advance(), AdvanceOutcome::Continued);
    session.select_answer("7");
    assert_eq!(session.advance(), AdvanceOutcome::Completed);

    let summary = session.summary().expect("completed session has a summary");
    assert_eq!(summary.score(), 1);
    assert_eq!(summary.total_questions(), 2);
    assert_eq!(summary.answers()[1].correct_answer, "42");
}

#[tokio::test]
async fn failing_source_falls_back_without_surfacing_an_error() {
    let loop_svc = QuizLoopService::new(fixed_clock(), Arc::new(FailingSource));

    let session = loop_svc
        .start_quiz(Difficulty::Easy)
        .await
        .expect("fallback substitution is not an error");

    assert!(!session.is_complete());
    assert!(session.total_questions() > 0);
    assert_eq!(session.current_index(), 0);
}

#[tokio::test]
async fn restart_produces_an_independent_session() {
    let source = FixedSource {
        questions: vec![build_question(0, "Only question?", "Yes", &["No"])],
    };
    let loop_svc = QuizLoopService::new(fixed_clock(), Arc::new(source));

    let mut first = loop_svc.start_quiz(Difficulty::Medium).await.unwrap();
    first.select_answer("Yes");
    first.advance();
    assert!(first.is_complete());

    let second = loop_svc.start_quiz(Difficulty::Medium).await.unwrap();
    assert!(!second.is_complete());
    assert!(second.answers().is_empty());
    assert_eq!(second.time_remaining(), quiz_core::QUESTION_TIME_LIMIT);
}
