use services::{AssessmentError, SectionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The picked answer does not fit the question.
    InvalidAnswer,
    /// Advance was requested before the current question was answered.
    Unanswered,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidAnswer => "That answer is not valid for this question.",
            Self::Unanswered => "Please answer the question before continuing.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SectionError> for ViewError {
    fn from(err: SectionError) -> Self {
        match err {
            SectionError::Answer(_) => Self::InvalidAnswer,
            SectionError::Unanswered { .. } => Self::Unanswered,
            _ => Self::Unknown,
        }
    }
}

impl From<AssessmentError> for ViewError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Section(err) => err.into(),
            _ => Self::Unknown,
        }
    }
}
