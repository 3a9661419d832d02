#![forbid(unsafe_code)]

pub mod assessment;
pub mod error;
pub mod results;
pub mod sections;

pub use readiness_core::catalog::Catalog;
pub use readiness_core::scoring::ScoringPolicy;

pub use error::{AssessmentError, ResultsError, SectionError};
pub use results::ResultsService;

pub use assessment::{AssessmentOrchestrator, AssessmentProgress, AssessmentStep};
pub use sections::{SectionController, SectionProgress, SectionStep, TagProgress};
