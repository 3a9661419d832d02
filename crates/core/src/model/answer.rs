use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId, SectionId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// An answer value that does not fit the question it was given for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question {question_id} is not part of this section")]
    UnknownQuestion { question_id: QuestionId },

    #[error("question {question_id} is not the current question ({current})")]
    NotCurrentQuestion {
        question_id: QuestionId,
        current: QuestionId,
    },

    #[error("answer for question {question_id} does not match its modality")]
    ModalityMismatch { question_id: QuestionId },

    #[error("question {question_id} has no option {option}")]
    UnknownOption {
        question_id: QuestionId,
        option: OptionId,
    },

    #[error("answer {value} for question {question_id} is outside [{min}, {max}]")]
    OutOfRange {
        question_id: QuestionId,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl AnswerError {
    /// The question the rejected answer was meant for.
    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        match self {
            Self::UnknownQuestion { question_id }
            | Self::NotCurrentQuestion { question_id, .. }
            | Self::ModalityMismatch { question_id }
            | Self::UnknownOption { question_id, .. }
            | Self::OutOfRange { question_id, .. } => question_id,
        }
    }
}

/// Errors raised while assembling per-section bundles into an assessment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BundleError {
    #[error("answers belong to section {found}, expected {expected}")]
    SectionMismatch {
        expected: SectionId,
        found: SectionId,
    },

    #[error("assessment is missing sections: {missing:?}")]
    MissingSections { missing: Vec<SectionId> },
}

//
// ─── ANSWER VALUE ─────────────────────────────────────────────────────────────
//

/// A recorded answer: a picked option, or a point on a numeric scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Choice(OptionId),
    Scale(i32),
}

//
// ─── ANSWER BUNDLE ────────────────────────────────────────────────────────────
//

/// Answers recorded for one section, keyed by question id.
///
/// Answers can be recorded or overwritten but never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerBundle {
    section: SectionId,
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerBundle {
    #[must_use]
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            answers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    /// Record (or overwrite) an answer, returning the previous one.
    ///
    /// Callers are expected to have validated `value` against the question.
    pub fn record(&mut self, question_id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(question_id, value)
    }

    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.answers.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.answers.keys()
    }
}

//
// ─── ASSESSMENT BUNDLE ────────────────────────────────────────────────────────
//

/// Completed section bundles, keyed by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentBundle {
    sections: BTreeMap<SectionId, AnswerBundle>,
}

impl AssessmentBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a section's answers, replacing any earlier bundle for it.
    pub fn insert(&mut self, answers: AnswerBundle) -> Option<AnswerBundle> {
        self.sections.insert(answers.section(), answers)
    }

    #[must_use]
    pub fn get(&self, section: SectionId) -> Option<&AnswerBundle> {
        self.sections.get(&section)
    }

    #[must_use]
    pub fn contains(&self, section: SectionId) -> bool {
        self.sections.contains_key(&section)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections with no bundle yet, in assessment order.
    #[must_use]
    pub fn missing_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| !self.contains(*section))
            .collect()
    }
}

//
// ─── COMPLETED ASSESSMENT ─────────────────────────────────────────────────────
//

/// An assessment holding exactly one bundle per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAssessment {
    psychometric: AnswerBundle,
    technical: AnswerBundle,
    wiscar: AnswerBundle,
}

impl CompletedAssessment {
    #[must_use]
    pub fn psychometric(&self) -> &AnswerBundle {
        &self.psychometric
    }

    #[must_use]
    pub fn technical(&self) -> &AnswerBundle {
        &self.technical
    }

    #[must_use]
    pub fn wiscar(&self) -> &AnswerBundle {
        &self.wiscar
    }

    #[must_use]
    pub fn section(&self, section: SectionId) -> &AnswerBundle {
        match section {
            SectionId::Psychometric => &self.psychometric,
            SectionId::Technical => &self.technical,
            SectionId::Wiscar => &self.wiscar,
        }
    }
}

impl TryFrom<AssessmentBundle> for CompletedAssessment {
    type Error = BundleError;

    fn try_from(mut bundle: AssessmentBundle) -> Result<Self, Self::Error> {
        let missing = bundle.missing_sections();
        let mut take = |section: SectionId| bundle.sections.remove(&section);
        match (
            take(SectionId::Psychometric),
            take(SectionId::Technical),
            take(SectionId::Wiscar),
        ) {
            (Some(psychometric), Some(technical), Some(wiscar)) => Ok(Self {
                psychometric,
                technical,
                wiscar,
            }),
            _ => Err(BundleError::MissingSections { missing }),
        }
    }
}

impl From<CompletedAssessment> for AssessmentBundle {
    fn from(completed: CompletedAssessment) -> Self {
        let mut bundle = AssessmentBundle::new();
        bundle.insert(completed.psychometric);
        bundle.insert(completed.technical);
        bundle.insert(completed.wiscar);
        bundle
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_with(section: SectionId, id: &str, value: AnswerValue) -> AnswerBundle {
        let mut bundle = AnswerBundle::new(section);
        bundle.record(QuestionId::new(id), value);
        bundle
    }

    #[test]
    fn record_overwrites_without_growing() {
        let mut bundle = AnswerBundle::new(SectionId::Technical);
        assert!(bundle.record(QuestionId::new("t1"), AnswerValue::Choice(OptionId::new(1))).is_none());
        let prev = bundle.record(QuestionId::new("t1"), AnswerValue::Choice(OptionId::new(2)));
        assert_eq!(prev, Some(AnswerValue::Choice(OptionId::new(1))));
        assert_eq!(bundle.len(), 1);
        assert_eq!(
            bundle.get(&QuestionId::new("t1")),
            Some(&AnswerValue::Choice(OptionId::new(2)))
        );
    }

    #[test]
    fn assessment_bundle_overwrites_per_section() {
        let mut bundle = AssessmentBundle::new();
        bundle.insert(bundle_with(SectionId::Wiscar, "w1", AnswerValue::Scale(2)));
        let prev = bundle.insert(bundle_with(SectionId::Wiscar, "w1", AnswerValue::Scale(4)));
        assert!(prev.is_some());
        assert_eq!(bundle.len(), 1);
        assert_eq!(
            bundle.missing_sections(),
            vec![SectionId::Psychometric, SectionId::Technical]
        );
    }

    #[test]
    fn completed_assessment_requires_every_section() {
        let mut bundle = AssessmentBundle::new();
        bundle.insert(bundle_with(SectionId::Psychometric, "p1", AnswerValue::Choice(OptionId::new(1))));
        bundle.insert(bundle_with(SectionId::Wiscar, "w1", AnswerValue::Scale(3)));

        let err = CompletedAssessment::try_from(bundle.clone()).unwrap_err();
        assert_eq!(
            err,
            BundleError::MissingSections {
                missing: vec![SectionId::Technical]
            }
        );

        bundle.insert(bundle_with(SectionId::Technical, "t1", AnswerValue::Choice(OptionId::new(2))));
        let completed = CompletedAssessment::try_from(bundle.clone()).unwrap();
        assert_eq!(completed.wiscar().get(&QuestionId::new("w1")), Some(&AnswerValue::Scale(3)));
        assert_eq!(AssessmentBundle::from(completed), bundle);
    }

    #[test]
    fn answer_value_serializes_with_kind_tag() {
        let json = serde_json::to_string(&AnswerValue::Scale(3)).unwrap();
        assert_eq!(json, r#"{"kind":"scale","value":3}"#);
        let json = serde_json::to_string(&AnswerValue::Choice(OptionId::new(2))).unwrap();
        assert_eq!(json, r#"{"kind":"choice","value":2}"#);
    }
}
