use std::sync::Arc;

use quiz_core::model::{QuestionId, QuizSummary, UserAnswer};
use quiz_core::time::fixed_now;

use super::test_harness::{
    FailingSource, FixedSource, ViewKind, build_question, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_difficulty_tiers() {
    let mut harness = setup_view_harness(ViewKind::Home, Arc::new(FailingSource), None);
    harness.rebuild();

    let html = harness.render();
    for label in ["Easy", "Medium", "Hard"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Recommended"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_fetched_question() {
    let source = FixedSource {
        questions: vec![build_question(0, "Capital of France?", "Paris", &["Berlin"])],
    };
    let mut harness = setup_view_harness(ViewKind::Quiz("medium"), Arc::new(source), None);
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Capital of France?"), "missing question in {html}");
    assert!(html.contains("Paris"), "missing option in {html}");
    assert!(html.contains("Question 1 of 1"), "missing progress in {html}");
    // A single-question session is already on its last question.
    assert!(html.contains("Finish Quiz"), "missing finish label in {html}");
    assert!(html.contains("0:30"), "missing countdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_falls_back_when_source_fails() {
    let mut harness = setup_view_harness(ViewKind::Quiz("easy"), Arc::new(FailingSource), None);
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    // The bundled set carried the session; no error surface.
    assert!(html.contains("Question 1 of"), "missing progress in {html}");
    assert!(!html.contains("Unable to Load Quiz"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_published_payload() {
    let now = fixed_now();
    let summary = QuizSummary::from_answers(
        vec![
            UserAnswer::new(QuestionId::new(0), "Paris", "Paris"),
            UserAnswer::new(QuestionId::new(1), "", "42"),
        ],
        2,
        now,
        now,
    )
    .unwrap();

    let mut harness =
        setup_view_harness(ViewKind::Results, Arc::new(FailingSource), Some(summary));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing heading in {html}");
    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("Answer Review"), "missing review in {html}");
    assert!(html.contains("No answer selected"), "missing placeholder in {html}");
    assert!(html.contains("42"), "missing correct answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_is_blank_without_a_session() {
    let mut harness = setup_view_harness(ViewKind::Results, Arc::new(FailingSource), None);
    harness.rebuild();

    let html = harness.render();
    assert!(
        !html.contains("Quiz Complete!"),
        "rendered results without a payload: {html}"
    );
}
