use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::{AnswerError, AnswerValue};
use crate::model::ids::{OptionId, QuestionId, SectionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while building question data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("section {section} has no questions")]
    EmptySection { section: SectionId },

    #[error("duplicate question id: {id}")]
    DuplicateId { id: QuestionId },

    #[error("question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("question {id} repeats option {option}")]
    DuplicateOption { id: QuestionId, option: OptionId },

    #[error("question {id} option {option} has fit {fit}, expected 0..={max}", max = MAX_FIT)]
    InvalidFit {
        id: QuestionId,
        option: OptionId,
        fit: u8,
    },

    #[error("scale [{min}, {max}] is empty")]
    InvalidScale { min: i32, max: i32 },

    #[error("question {id} is tagged for a different section than {section}")]
    TagMismatch { id: QuestionId, section: SectionId },
}

//
// ─── TAGS ──────────────────────────────────────────────────────────────────────
//

/// Highest `fit` weight a choice option can declare.
pub const MAX_FIT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsychometricCategory {
    Personality,
    Motivation,
    Interests,
    Cognitive,
}

impl PsychometricCategory {
    pub const ALL: [Self; 4] = [
        Self::Personality,
        Self::Motivation,
        Self::Interests,
        Self::Cognitive,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personality => "Personality",
            Self::Motivation => "Motivation",
            Self::Interests => "Interests",
            Self::Cognitive => "Cognitive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalCategory {
    UxFundamentals,
    LegalKnowledge,
    Analytical,
    Practical,
}

impl TechnicalCategory {
    pub const ALL: [Self; 4] = [
        Self::UxFundamentals,
        Self::LegalKnowledge,
        Self::Analytical,
        Self::Practical,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UxFundamentals => "UX Fundamentals",
            Self::LegalKnowledge => "Legal Knowledge",
            Self::Analytical => "Analytical Thinking",
            Self::Practical => "Practical Application",
        }
    }
}

/// The six WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [Self; 6] = [
        Self::Will,
        Self::Interest,
        Self::Skill,
        Self::Cognitive,
        Self::Ability,
        Self::RealWorld,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Fit",
        }
    }
}

/// Category (or dimension) a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "section", content = "tag", rename_all = "snake_case")]
pub enum QuestionTag {
    Psychometric(PsychometricCategory),
    Technical(TechnicalCategory),
    Wiscar(WiscarDimension),
}

impl QuestionTag {
    #[must_use]
    pub fn section(self) -> SectionId {
        match self {
            Self::Psychometric(_) => SectionId::Psychometric,
            Self::Technical(_) => SectionId::Technical,
            Self::Wiscar(_) => SectionId::Wiscar,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Psychometric(category) => category.label(),
            Self::Technical(category) => category.label(),
            Self::Wiscar(dimension) => dimension.label(),
        }
    }

    /// Every tag a section can carry, in display order.
    #[must_use]
    pub fn all_for(section: SectionId) -> Vec<Self> {
        match section {
            SectionId::Psychometric => PsychometricCategory::ALL
                .into_iter()
                .map(Self::Psychometric)
                .collect(),
            SectionId::Technical => TechnicalCategory::ALL
                .into_iter()
                .map(Self::Technical)
                .collect(),
            SectionId::Wiscar => WiscarDimension::ALL.into_iter().map(Self::Wiscar).collect(),
        }
    }
}

//
// ─── MODALITY ──────────────────────────────────────────────────────────────────
//

/// One selectable option of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,
    pub label: String,
    /// Marks the right answer of a knowledge question.
    pub correct: bool,
    /// How strongly this option matches the target profile, `0..=MAX_FIT`.
    pub fit: u8,
}

impl ChoiceOption {
    #[must_use]
    pub fn new(id: u8, label: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            label: label.into(),
            correct: false,
            fit: 0,
        }
    }

    #[must_use]
    pub fn with_fit(mut self, fit: u8) -> Self {
        self.fit = fit;
        self
    }

    #[must_use]
    pub fn correct(mut self) -> Self {
        self.correct = true;
        self
    }
}

/// Inclusive integer scale with step 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBounds {
    min: i32,
    max: i32,
    labels: Vec<String>,
}

impl ScaleBounds {
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidScale` if `min >= max`.
    pub fn try_new(min: i32, max: i32, labels: Vec<String>) -> Result<Self, QuestionError> {
        if min >= max {
            return Err(QuestionError::InvalidScale { min, max });
        }
        Ok(Self { min, max, labels })
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` on the scale, `0.0` at `min` and `1.0` at `max`.
    #[must_use]
    pub fn normalized(&self, value: i32) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        f64::from(clamped - self.min) / f64::from(self.max - self.min)
    }

    /// Display label for `value`, spreading the labels evenly over the scale.
    #[must_use]
    pub fn label_for(&self, value: i32) -> Option<&str> {
        if self.labels.is_empty() || !self.contains(value) {
            return None;
        }
        let steps = usize::try_from(self.max - self.min).ok()? + 1;
        let offset = usize::try_from(value - self.min).ok()?;
        let idx = (offset * self.labels.len() / steps).min(self.labels.len() - 1);
        self.labels.get(idx).map(String::as_str)
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerModality {
    Choice { options: Vec<ChoiceOption> },
    Scale { bounds: ScaleBounds },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    tag: QuestionTag,
    modality: AnswerModality,
    explanation: Option<String>,
}

impl Question {
    /// Build a single-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when options are missing, repeated, or carry an
    /// out-of-range fit weight.
    pub fn choice(
        id: impl Into<String>,
        tag: QuestionTag,
        text: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Result<Self, QuestionError> {
        let id = QuestionId::new(id);
        if options.is_empty() {
            return Err(QuestionError::NoOptions { id });
        }
        for (idx, option) in options.iter().enumerate() {
            if options[..idx].iter().any(|other| other.id == option.id) {
                return Err(QuestionError::DuplicateOption {
                    id,
                    option: option.id,
                });
            }
            if option.fit > MAX_FIT {
                return Err(QuestionError::InvalidFit {
                    id,
                    option: option.id,
                    fit: option.fit,
                });
            }
        }

        Ok(Self {
            id,
            text: text.into(),
            tag,
            modality: AnswerModality::Choice { options },
            explanation: None,
        })
    }

    /// Build a bounded-scale question.
    #[must_use]
    pub fn scale(
        id: impl Into<String>,
        tag: QuestionTag,
        text: impl Into<String>,
        bounds: ScaleBounds,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            tag,
            modality: AnswerModality::Scale { bounds },
            explanation: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tag(&self) -> QuestionTag {
        self.tag
    }

    #[must_use]
    pub fn modality(&self) -> &AnswerModality {
        &self.modality
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.modality {
            AnswerModality::Choice { options } => options,
            AnswerModality::Scale { .. } => &[],
        }
    }

    #[must_use]
    pub fn scale_bounds(&self) -> Option<&ScaleBounds> {
        match &self.modality {
            AnswerModality::Scale { bounds } => Some(bounds),
            AnswerModality::Choice { .. } => None,
        }
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&ChoiceOption> {
        self.options().iter().find(|option| option.id == id)
    }

    /// Check that `value` matches this question's declared modality.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` naming this question when the value has the wrong
    /// modality, picks an unknown option, or falls outside the scale.
    pub fn validate_answer(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match (&self.modality, value) {
            (AnswerModality::Choice { .. }, AnswerValue::Choice(option)) => {
                if self.option(*option).is_none() {
                    return Err(AnswerError::UnknownOption {
                        question_id: self.id.clone(),
                        option: *option,
                    });
                }
                Ok(())
            }
            (AnswerModality::Scale { bounds }, AnswerValue::Scale(v)) => {
                if !bounds.contains(*v) {
                    return Err(AnswerError::OutOfRange {
                        question_id: self.id.clone(),
                        value: *v,
                        min: bounds.min(),
                        max: bounds.max(),
                    });
                }
                Ok(())
            }
            _ => Err(AnswerError::ModalityMismatch {
                question_id: self.id.clone(),
            }),
        }
    }

    /// Whether `value` picks an option flagged as correct.
    #[must_use]
    pub fn is_correct(&self, value: &AnswerValue) -> bool {
        match value {
            AnswerValue::Choice(option) => self.option(*option).is_some_and(|o| o.correct),
            AnswerValue::Scale(_) => false,
        }
    }

    /// How strongly `value` matches the target profile, in `[0, 1]`.
    ///
    /// Values that do not fit the modality score 0.
    #[must_use]
    pub fn fit_ratio(&self, value: &AnswerValue) -> f64 {
        match (&self.modality, value) {
            (AnswerModality::Choice { .. }, AnswerValue::Choice(option)) => self
                .option(*option)
                .map_or(0.0, |o| f64::from(o.fit) / f64::from(MAX_FIT)),
            (AnswerModality::Scale { bounds }, AnswerValue::Scale(v)) if bounds.contains(*v) => {
                bounds.normalized(*v)
            }
            _ => 0.0,
        }
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// Ordered, non-empty list of questions for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    section: SectionId,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionError` if the set is empty, repeats an id, or contains
    /// a question tagged for another section.
    pub fn new(section: SectionId, questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptySection { section });
        }
        for (idx, question) in questions.iter().enumerate() {
            if question.tag.section() != section {
                return Err(QuestionError::TagMismatch {
                    id: question.id.clone(),
                    section,
                });
            }
            if questions[..idx].iter().any(|q| q.id == question.id) {
                return Err(QuestionError::DuplicateId {
                    id: question.id.clone(),
                });
            }
        }
        Ok(Self { section, questions })
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Tags carried by at least one question, in display order.
    #[must_use]
    pub fn tags(&self) -> Vec<QuestionTag> {
        QuestionTag::all_for(self.section)
            .into_iter()
            .filter(|tag| self.questions.iter().any(|q| q.tag == *tag))
            .collect()
    }

    #[must_use]
    pub fn count_with_tag(&self, tag: QuestionTag) -> usize {
        self.questions.iter().filter(|q| q.tag == tag).count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn likert() -> ScaleBounds {
        ScaleBounds::try_new(
            1,
            5,
            ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
                .map(String::from)
                .to_vec(),
        )
        .unwrap()
    }

    fn tech_tag() -> QuestionTag {
        QuestionTag::Technical(TechnicalCategory::Analytical)
    }

    #[test]
    fn choice_rejects_duplicate_options() {
        let err = Question::choice(
            "t1",
            tech_tag(),
            "Q",
            vec![ChoiceOption::new(1, "a"), ChoiceOption::new(1, "b")],
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateOption { .. }));
    }

    #[test]
    fn choice_rejects_fit_above_max() {
        let err = Question::choice(
            "t1",
            tech_tag(),
            "Q",
            vec![ChoiceOption::new(1, "a").with_fit(MAX_FIT + 1)],
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::InvalidFit { fit: 4, .. }));
    }

    #[test]
    fn scale_requires_non_empty_range() {
        assert!(ScaleBounds::try_new(5, 5, Vec::new()).is_err());
        assert!(ScaleBounds::try_new(1, 10, Vec::new()).is_ok());
    }

    #[test]
    fn scale_labels_spread_over_range() {
        let bounds = likert();
        assert_eq!(bounds.label_for(1), Some("Strongly Disagree"));
        assert_eq!(bounds.label_for(3), Some("Neutral"));
        assert_eq!(bounds.label_for(5), Some("Strongly Agree"));
        assert_eq!(bounds.label_for(6), None);

        let wide = ScaleBounds::try_new(
            1,
            10,
            ["Beginner", "Intermediate", "Advanced", "Expert"]
                .map(String::from)
                .to_vec(),
        )
        .unwrap();
        assert_eq!(wide.label_for(1), Some("Beginner"));
        assert_eq!(wide.label_for(10), Some("Expert"));
    }

    #[test]
    fn validate_answer_checks_modality_and_range() {
        let scale = Question::scale("w1", QuestionTag::Wiscar(WiscarDimension::Will), "Q", likert());
        assert!(scale.validate_answer(&AnswerValue::Scale(3)).is_ok());
        assert!(matches!(
            scale.validate_answer(&AnswerValue::Scale(0)),
            Err(AnswerError::OutOfRange { value: 0, min: 1, max: 5, .. })
        ));
        assert!(matches!(
            scale.validate_answer(&AnswerValue::Choice(OptionId::new(1))),
            Err(AnswerError::ModalityMismatch { .. })
        ));

        let choice = Question::choice(
            "t1",
            tech_tag(),
            "Q",
            vec![ChoiceOption::new(1, "a"), ChoiceOption::new(2, "b").correct()],
        )
        .unwrap();
        assert!(choice.validate_answer(&AnswerValue::Choice(OptionId::new(2))).is_ok());
        let err = choice
            .validate_answer(&AnswerValue::Choice(OptionId::new(9)))
            .unwrap_err();
        assert_eq!(err.question_id(), &QuestionId::new("t1"));
        assert!(choice.is_correct(&AnswerValue::Choice(OptionId::new(2))));
        assert!(!choice.is_correct(&AnswerValue::Choice(OptionId::new(1))));
    }

    #[test]
    fn fit_ratio_normalises_both_modalities() {
        let scale = Question::scale("w1", QuestionTag::Wiscar(WiscarDimension::Will), "Q", likert());
        assert!((scale.fit_ratio(&AnswerValue::Scale(1)) - 0.0).abs() < f64::EPSILON);
        assert!((scale.fit_ratio(&AnswerValue::Scale(3)) - 0.5).abs() < f64::EPSILON);
        assert!((scale.fit_ratio(&AnswerValue::Scale(5)) - 1.0).abs() < f64::EPSILON);

        let choice = Question::choice(
            "w2",
            QuestionTag::Wiscar(WiscarDimension::Will),
            "Q",
            vec![
                ChoiceOption::new(1, "a").with_fit(3),
                ChoiceOption::new(2, "b").with_fit(0),
            ],
        )
        .unwrap();
        assert!((choice.fit_ratio(&AnswerValue::Choice(OptionId::new(1))) - 1.0).abs() < f64::EPSILON);
        assert!(choice.fit_ratio(&AnswerValue::Scale(4)).abs() < f64::EPSILON);
    }

    #[test]
    fn question_set_rejects_foreign_tags_and_duplicates() {
        let q = |id: &str| Question::scale(id, QuestionTag::Wiscar(WiscarDimension::Skill), "Q", likert());

        let err = QuestionSet::new(SectionId::Technical, vec![q("s1")]).unwrap_err();
        assert!(matches!(err, QuestionError::TagMismatch { .. }));

        let err = QuestionSet::new(SectionId::Wiscar, vec![q("s1"), q("s1")]).unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateId { .. }));

        let err = QuestionSet::new(SectionId::Wiscar, Vec::new()).unwrap_err();
        assert!(matches!(err, QuestionError::EmptySection { .. }));
    }

    #[test]
    fn question_set_reports_used_tags_in_display_order() {
        let set = QuestionSet::new(
            SectionId::Wiscar,
            vec![
                Question::scale("s1", QuestionTag::Wiscar(WiscarDimension::Skill), "Q", likert()),
                Question::scale("w1", QuestionTag::Wiscar(WiscarDimension::Will), "Q", likert()),
                Question::scale("s2", QuestionTag::Wiscar(WiscarDimension::Skill), "Q", likert()),
            ],
        )
        .unwrap();
        assert_eq!(
            set.tags(),
            vec![
                QuestionTag::Wiscar(WiscarDimension::Will),
                QuestionTag::Wiscar(WiscarDimension::Skill),
            ]
        );
        assert_eq!(set.count_with_tag(QuestionTag::Wiscar(WiscarDimension::Skill)), 2);
        assert_eq!(set.position(&QuestionId::new("w1")), Some(1));
    }
}
