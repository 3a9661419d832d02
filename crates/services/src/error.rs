//! Shared error types for the services crate.

use thiserror::Error;

use readiness_core::model::{AnswerError, BundleError, QuestionId, SectionId};

/// Errors emitted by `SectionController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("question {question_id} must be answered before advancing")]
    Unanswered { question_id: QuestionId },
    #[error("section already completed")]
    Completed,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

/// Errors emitted by `AssessmentOrchestrator`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment already finished")]
    Finished,
    #[error("already at the first section")]
    AtFirstSection,
    #[error("cannot finish assessment, sections not completed: {missing:?}")]
    MissingSections { missing: Vec<SectionId> },
    #[error(transparent)]
    Bundle(#[from] BundleError),
    #[error(transparent)]
    Section(#[from] SectionError),
}

/// Errors emitted by `ResultsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("failed to export score report")]
    Export(#[from] serde_json::Error),
}
