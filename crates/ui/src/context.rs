use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use readiness_core::model::CompletedAssessment;
use services::{Catalog, ResultsService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn skip_landing(&self) -> bool;

    fn results(&self) -> Arc<ResultsService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    skip_landing_configured: bool,
    skip_landing_once: Arc<AtomicBool>,

    results: Arc<ResultsService>,
    completed: Arc<Mutex<Option<CompletedAssessment>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let skip_landing_configured = app.skip_landing();

        Self {
            catalog: app.catalog(),
            skip_landing_configured,
            skip_landing_once: Arc::new(AtomicBool::new(skip_landing_configured)),
            results: app.results(),
            completed: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn take_skip_landing(&self) -> bool {
        self.skip_landing_once.swap(false, Ordering::AcqRel)
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn skip_landing_configured(&self) -> bool {
        self.skip_landing_configured
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    /// Hand a finished assessment to the results view, replacing any earlier one.
    pub fn stash_completed(&self, assessment: CompletedAssessment) {
        *self
            .completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(assessment);
    }

    /// Take the stashed assessment; a second call returns `None`.
    #[must_use]
    pub fn take_completed(&self) -> Option<CompletedAssessment> {
        self.completed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
