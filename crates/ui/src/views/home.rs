use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::model::Difficulty;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let question_count = ctx.quiz_loop().question_count();
    let default_difficulty = ctx.default_difficulty();

    rsx! {
        div { class: "page home-page",
            p { class: "home-intro",
                "{question_count} questions, 30 seconds each. Pick a difficulty to start."
            }
            div { class: "home-difficulties",
                for tier in Difficulty::ALL {
                    DifficultyCard { tier, recommended: tier == default_difficulty }
                }
            }
        }
    }
}

#[component]
fn DifficultyCard(tier: Difficulty, recommended: bool) -> Element {
    let class = if recommended {
        "difficulty-card difficulty-card--recommended"
    } else {
        "difficulty-card"
    };

    rsx! {
        Link {
            to: Route::Quiz { difficulty: tier.as_str().to_string() },
            class: "{class}",
            span { class: "difficulty-card__label", "{tier.label()}" }
            if recommended {
                span { class: "difficulty-card__hint", "Recommended" }
            }
        }
    }
}
