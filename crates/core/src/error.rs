use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{AnswerError, BundleError, QuestionError};
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
