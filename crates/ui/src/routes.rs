use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentView, HomeView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "topbar",
            Link { class: "brand", to: Route::Home {}, "Legal UX Assessment" }
            span { class: "badge", "Professional Assessment" }
        }
    }
}
