mod orchestrator;

// Public API of the assessment subsystem.
pub use crate::error::AssessmentError;
pub use orchestrator::{AssessmentOrchestrator, AssessmentProgress, AssessmentStep};
