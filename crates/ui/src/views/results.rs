use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{AnswerRowVm, ResultsVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Claim the one-shot payload exactly once per mount. A direct visit
    // without a completed quiz finds the slot empty.
    let payload = use_hook(|| ctx.take_results().map(|summary| map_results(&summary)));
    let missing = payload.is_none();

    use_effect(move || {
        if missing {
            let _ = navigator.replace(Route::Home {});
        }
    });

    let Some(results) = payload else {
        return rsx! {};
    };

    rsx! {
        div { class: "page results-page",
            header { class: "results-header",
                h2 { "Quiz Complete!" }
                p { class: "results-header__message", "{results.message}" }
                p { class: "results-header__completed", "Completed {results.completed_at_str}" }
            }

            section { class: "results-score",
                div { class: "results-score__fraction", "{results.score}/{results.total}" }
                div { class: "results-score__percent", "{results.percentage}% Correct" }
                div { class: "results-score__split",
                    div { class: "results-score__cell results-score__cell--correct",
                        span { "Correct" }
                        strong { "{results.score}" }
                    }
                    div { class: "results-score__cell results-score__cell--incorrect",
                        span { "Incorrect" }
                        strong { "{results.incorrect}" }
                    }
                }
            }

            section { class: "results-review",
                h3 { "Answer Review" }
                ul { class: "results-review__list",
                    for row in results.rows.clone() {
                        AnswerRow { row }
                    }
                }
            }

            footer { class: "results-actions",
                Link { to: Route::Quiz { difficulty: ctx.default_difficulty().as_str().to_string() },
                    class: "btn btn-primary",
                    "Play Again"
                }
                Link { to: Route::Home {}, class: "btn btn-secondary", "Home" }
            }
        }
    }
}

#[component]
fn AnswerRow(row: AnswerRowVm) -> Element {
    let class = if row.is_correct {
        "results-row results-row--correct"
    } else {
        "results-row results-row--incorrect"
    };

    rsx! {
        li { class: "{class}",
            p { class: "results-row__title", "Question {row.number}" }
            p { class: "results-row__answer",
                span { "Your answer: " }
                span { "{row.selected_display}" }
            }
            if !row.is_correct {
                p { class: "results-row__correct",
                    span { "Correct answer: " }
                    span { "{row.correct_answer}" }
                }
            }
        }
    }
}
