use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use readiness_core::model::CompletedAssessment;
use services::{Catalog, ResultsService};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{AssessmentView, HomeView, ResultsView};

#[derive(Clone)]
struct TestApp {
    results: Arc<ResultsService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        Catalog::standard()
    }

    fn skip_landing(&self) -> bool {
        false
    }

    fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Assessment,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
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
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub context: AppContext,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

/// Mount `view` with a fresh context, optionally pre-filling the results handoff.
pub fn setup_view_harness(view: ViewKind, completed: Option<CompletedAssessment>) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        results: Arc::new(ResultsService::default()),
    });
    let context = build_app_context(&app);
    if let Some(completed) = completed {
        context.stash_completed(completed);
    }

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: context.clone(),
            view,
        },
    );

    ViewHarness { dom, context }
}
