mod answer;
mod ids;
mod question;
mod report;

pub use ids::{OptionId, ParseIdError, QuestionId, SectionId};

pub use answer::{
    AnswerBundle, AnswerError, AnswerValue, AssessmentBundle, BundleError, CompletedAssessment,
};
pub use question::{
    AnswerModality, ChoiceOption, MAX_FIT, PsychometricCategory, Question, QuestionError,
    QuestionSet, QuestionTag, ScaleBounds, TechnicalCategory, WiscarDimension,
};
pub use report::{CareerPathMatch, CategoryScore, RecommendationTier, ScoreReport, WiscarScores};
