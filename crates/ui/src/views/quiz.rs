use std::str::FromStr;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::Difficulty;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizOutcome, QuizVm, format_timer, start_quiz};

#[component]
pub fn QuizView(difficulty: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let parsed_difficulty = Difficulty::from_str(&difficulty).ok();

    let vm = use_signal(|| None::<QuizVm>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut vm = vm;

        async move {
            let Some(tier) = parsed_difficulty else {
                return Err(ViewError::Unknown);
            };
            let started = start_quiz(&quiz_loop, tier).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let ctx_for_dispatch = ctx.clone();
    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        // Ticks fire every second regardless of phase; don't dirty the
        // signal while there is no session to count down.
        if matches!(intent, QuizIntent::Tick) && vm.peek().is_none() {
            return;
        }

        let mut completed = false;
        {
            let mut guard = vm.write();
            let Some(session) = guard.as_mut() else {
                return;
            };

            let outcome = match intent {
                QuizIntent::Select(choice) => {
                    session.select(choice);
                    None
                }
                QuizIntent::Advance => Some(session.advance()),
                QuizIntent::Retreat => {
                    session.retreat();
                    None
                }
                QuizIntent::Tick => session.tick(),
            };

            if outcome == Some(QuizOutcome::Completed) {
                if let Some(summary) = session.summary() {
                    ctx_for_dispatch.publish_results(summary);
                }
                completed = true;
            }
        }

        if completed {
            navigator.push(Route::Results {});
        }
    });

    // The countdown is an explicit task that funnels one Tick per second
    // through the same dispatch path as user actions, so timer-driven and
    // manual transitions are serialized identically. The task dies with the
    // view; ticks are inert while loading or after completion.
    use_hook(|| {
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                dispatch_intent.call(QuizIntent::Tick);
            }
        })
    });

    let retry_action = use_callback(move |()| {
        let mut vm = vm;
        let mut resource = resource;
        vm.set(None);
        resource.restart();
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let has_session = vm.read().is_some();
        if !has_session {
            return;
        }

        if let Key::Character(value) = evt.data.key() {
            if let Ok(number) = value.parse::<usize>() {
                let option = vm
                    .read()
                    .as_ref()
                    .and_then(|session| session.options().get(number.wrapping_sub(1)).cloned());
                if let Some(option) = option {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Select(option));
                }
            }
            return;
        }

        match evt.data.key() {
            Key::ArrowLeft => {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Retreat);
            }
            Key::ArrowRight | Key::Enter => {
                let can_advance = vm.read().as_ref().is_some_and(QuizVm::has_selection);
                if can_advance {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Advance);
                }
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let session = vm_guard.as_ref();
    let question_text = session.and_then(QuizVm::question_text).map(str::to_string);
    let options: Vec<String> = session.map(|s| s.options().to_vec()).unwrap_or_default();
    let selected = session.map(QuizVm::selected).unwrap_or_default().to_string();
    let category = session.and_then(QuizVm::category).map(str::to_string);
    let difficulty_label = session.and_then(QuizVm::difficulty_label);
    let (current_number, total) = session.map_or((0, 0), |s| (s.current_number(), s.total()));
    let time_remaining = session.map_or(0, QuizVm::time_remaining);
    let is_first = session.is_none_or(QuizVm::is_first_question);
    let is_last = session.is_some_and(QuizVm::is_last_question);
    let has_selection = session.is_some_and(QuizVm::has_selection);

    let progress_pct = if total == 0 {
        0
    } else {
        current_number * 100 / total
    };
    let timer_label = format_timer(time_remaining);
    let timer_class = if time_remaining <= 10 {
        "quiz-timer quiz-timer--low"
    } else {
        "quiz-timer"
    };
    let next_label = if is_last { "Finish Quiz" } else { "Next" };
    let status_hint = if has_selection {
        "Click Next to continue"
    } else {
        "Select an answer to proceed"
    };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "quiz-loading",
                        h2 { "Loading Quiz..." }
                        p { "Preparing your questions" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        h2 { "Unable to Load Quiz" }
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| retry_action.call(()),
                            "Try Again"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    div { class: "quiz-progress",
                        span { class: "quiz-progress__count", "Question {current_number} of {total}" }
                        span { class: "{timer_class}", "{timer_label}" }
                    }
                    div { class: "quiz-progress__track",
                        div { class: "quiz-progress__fill", style: "width: {progress_pct}%" }
                    }
                    if let Some(text) = question_text {
                        div { class: "quiz-question",
                            div { class: "quiz-question__meta",
                                if let Some(category) = category {
                                    span { class: "quiz-question__category", "{category}" }
                                }
                                if let Some(label) = difficulty_label {
                                    span { class: "quiz-question__difficulty", "{label}" }
                                }
                            }
                            h2 { class: "quiz-question__text", "{text}" }
                            div { class: "quiz-options",
                                for option in options {
                                    OptionButton {
                                        option: option.clone(),
                                        selected: option == selected,
                                        on_intent: dispatch_intent,
                                    }
                                }
                            }
                        }
                        div { class: "quiz-nav",
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-previous",
                                r#type: "button",
                                disabled: is_first,
                                onclick: move |_| dispatch_intent.call(QuizIntent::Retreat),
                                "Previous"
                            }
                            p { class: "quiz-nav__hint", "{status_hint}" }
                            button {
                                class: "btn btn-primary",
                                id: "quiz-next",
                                r#type: "button",
                                disabled: !has_selection,
                                onclick: move |_| dispatch_intent.call(QuizIntent::Advance),
                                "{next_label}"
                            }
                        }
                    } else {
                        p { "No questions available." }
                    }
                },
            }
        }
    }
}

#[component]
fn OptionButton(
    option: String,
    selected: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let choice = option.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Select(choice.clone())),
            "{option}"
        }
    }
}
