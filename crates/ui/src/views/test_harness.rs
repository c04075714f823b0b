use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::model::{Difficulty, Question, QuestionId, QuizSummary};
use quiz_core::time::fixed_clock;
use services::{QuestionSource, QuizLoopService, TriviaError};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{HomeView, QuizView, ResultsView};

pub struct FixedSource {
    pub questions: Vec<Question>,
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

pub struct FailingSource;

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

pub fn build_question(id: usize, text: &str, correct: &str, others: &[&str]) -> Question {
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

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn default_difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz(&'static str),
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    initial_results: Option<QuizSummary>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx: AppContext = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);

    if let Some(summary) = props.initial_results.clone() {
        ctx.publish_results(summary);
    }

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz(difficulty) => rsx! { QuizView { difficulty: difficulty.to_string() } },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    source: Arc<dyn QuestionSource>,
    initial_results: Option<QuizSummary>,
) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(fixed_clock(), source));
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            initial_results,
        },
    );

    ViewHarness { dom }
}
