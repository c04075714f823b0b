use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:difficulty", QuizView)] Quiz { difficulty: String },
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "QuizMaster" }
                p { class: "masthead__tagline", "Test your knowledge with our interactive quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
