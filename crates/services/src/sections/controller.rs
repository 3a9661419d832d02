use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use readiness_core::model::{
    AnswerBundle, AnswerError, AnswerValue, BundleError, Question, QuestionId, QuestionSet,
    SectionId,
};

use super::progress::{SectionProgress, TagProgress};
use crate::error::SectionError;

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStep {
    /// Moved on to the question at `index`.
    Next { index: usize },
    /// The last question was answered; carries the section's answers.
    Completed(AnswerBundle),
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Walks one section's questions in order and collects the answers.
///
/// The same controller drives every section: the answer shape is taken from
/// each question's declared modality.
pub struct SectionController {
    questions: Arc<QuestionSet>,
    answers: AnswerBundle,
    current: usize,
    completed: bool,
}

impl SectionController {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        let answers = AnswerBundle::new(questions.section());
        Self {
            questions,
            answers,
            current: 0,
            completed: false,
        }
    }

    /// Resume a section with answers recorded earlier.
    ///
    /// The controller starts on the first unanswered question, or on the last
    /// question when every question already has an answer.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::Bundle` if `answers` belongs to another section,
    /// and `SectionError::Answer` if any recorded answer does not fit its question.
    pub fn with_answers(
        questions: Arc<QuestionSet>,
        answers: AnswerBundle,
    ) -> Result<Self, SectionError> {
        if answers.section() != questions.section() {
            return Err(BundleError::SectionMismatch {
                expected: questions.section(),
                found: answers.section(),
            }
            .into());
        }

        for (question_id, value) in answers.iter() {
            let question = questions
                .find(question_id)
                .ok_or_else(|| AnswerError::UnknownQuestion {
                    question_id: question_id.clone(),
                })?;
            question.validate_answer(value)?;
        }

        let current = questions
            .iter()
            .position(|q| !answers.contains(q.id()))
            .unwrap_or_else(|| questions.len().saturating_sub(1));

        debug!(
            "resuming section {} at question {} with {} answers",
            questions.section(),
            current + 1,
            answers.len()
        );

        Ok(Self {
            questions,
            answers,
            current,
            completed: false,
        })
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.questions.section()
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerBundle {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The question being asked, `None` once the section is completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id()))
    }

    /// Whether `advance` would succeed right now.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> SectionProgress {
        let tags = self
            .questions
            .tags()
            .into_iter()
            .map(|tag| {
                let (answered, total) = self
                    .questions
                    .iter()
                    .filter(|q| q.tag() == tag)
                    .fold((0, 0), |(answered, total), q| {
                        (answered + usize::from(self.answers.contains(q.id())), total + 1)
                    });
                TagProgress {
                    tag,
                    answered,
                    total,
                }
            })
            .collect();

        SectionProgress {
            section: self.section(),
            index: self.current,
            total: self.questions.len(),
            answered: self.answers.len(),
            is_complete: self.completed,
            tags,
        }
    }

    /// Record (or overwrite) the answer to the current question.
    ///
    /// Returns the answer it replaced, if any. A rejected answer leaves the
    /// recorded answers untouched.
    ///
    /// # Errors
    ///
    /// - `SectionError::Completed` once the section has been completed
    /// - `SectionError::Answer` if `question_id` is not the current question
    ///   or `value` does not fit the question's modality
    pub fn select_answer(
        &mut self,
        question_id: &QuestionId,
        value: AnswerValue,
    ) -> Result<Option<AnswerValue>, SectionError> {
        let question = self.current_question().ok_or(SectionError::Completed)?;

        if question.id() != question_id {
            let err = if self.questions.find(question_id).is_some() {
                AnswerError::NotCurrentQuestion {
                    question_id: question_id.clone(),
                    current: question.id().clone(),
                }
            } else {
                AnswerError::UnknownQuestion {
                    question_id: question_id.clone(),
                }
            };
            warn!("rejected answer in section {}: {err}", self.section());
            return Err(err.into());
        }

        if let Err(err) = question.validate_answer(&value) {
            warn!("rejected answer in section {}: {err}", self.section());
            return Err(err.into());
        }

        debug!("section {} question {question_id} answered", self.section());
        Ok(self.answers.record(question_id.clone(), value))
    }

    /// Move past the current question.
    ///
    /// # Errors
    ///
    /// - `SectionError::Unanswered` if the current question has no answer;
    ///   the index does not change
    /// - `SectionError::Completed` once the section has been completed
    pub fn advance(&mut self) -> Result<SectionStep, SectionError> {
        let question = self.current_question().ok_or(SectionError::Completed)?;
        if !self.answers.contains(question.id()) {
            return Err(SectionError::Unanswered {
                question_id: question.id().clone(),
            });
        }

        if self.is_last_question() {
            self.completed = true;
            info!(
                "section {} completed with {} answers",
                self.section(),
                self.answers.len()
            );
            return Ok(SectionStep::Completed(self.answers.clone()));
        }

        self.current += 1;
        debug!("section {} moved to question {}", self.section(), self.current + 1);
        Ok(SectionStep::Next {
            index: self.current,
        })
    }

    /// Step back one question, keeping every answer. No-op on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::Completed` once the section has been completed.
    pub fn go_back(&mut self) -> Result<usize, SectionError> {
        if self.completed {
            return Err(SectionError::Completed);
        }
        self.current = self.current.saturating_sub(1);
        Ok(self.current)
    }
}

impl fmt::Debug for SectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionController")
            .field("section", &self.section())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("completed", &self.completed)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::catalog::Catalog;
    use readiness_core::model::{AnswerModality, OptionId};

    fn controller(section: SectionId) -> SectionController {
        SectionController::new(Catalog::standard().section(section).clone())
    }

    fn any_valid(question: &Question) -> AnswerValue {
        match question.modality() {
            AnswerModality::Choice { options } => AnswerValue::Choice(options[0].id),
            AnswerModality::Scale { bounds } => AnswerValue::Scale(bounds.min()),
        }
    }

    fn answer_current(controller: &mut SectionController) {
        let question = controller.current_question().unwrap();
        let (id, value) = (question.id().clone(), any_valid(question));
        controller.select_answer(&id, value).unwrap();
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut controller = controller(SectionId::Psychometric);
        assert!(!controller.can_advance());

        let err = controller.advance().unwrap_err();
        assert_eq!(
            err,
            SectionError::Unanswered {
                question_id: QuestionId::new("p1")
            }
        );
        assert_eq!(controller.current_index(), 0);

        answer_current(&mut controller);
        assert!(controller.can_advance());
        assert_eq!(controller.advance().unwrap(), SectionStep::Next { index: 1 });
    }

    #[test]
    fn rejects_answers_for_other_questions() {
        let mut controller = controller(SectionId::Technical);

        let err = controller
            .select_answer(&QuestionId::new("t2"), AnswerValue::Choice(OptionId::new(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            SectionError::Answer(AnswerError::NotCurrentQuestion { .. })
        ));

        let err = controller
            .select_answer(&QuestionId::new("zz"), AnswerValue::Choice(OptionId::new(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            SectionError::Answer(AnswerError::UnknownQuestion { .. })
        ));
        assert!(controller.answers().is_empty());
    }

    #[test]
    fn rejects_values_outside_the_modality() {
        let mut controller = controller(SectionId::Wiscar);
        let w1 = QuestionId::new("w1");

        let err = controller
            .select_answer(&w1, AnswerValue::Scale(6))
            .unwrap_err();
        assert_eq!(err.to_string(), "answer 6 for question w1 is outside [1, 5]");

        let err = controller
            .select_answer(&w1, AnswerValue::Choice(OptionId::new(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            SectionError::Answer(AnswerError::ModalityMismatch { .. })
        ));
        assert!(controller.current_answer().is_none());
    }

    #[test]
    fn reselecting_overwrites_the_answer() {
        let mut controller = controller(SectionId::Wiscar);
        let w1 = QuestionId::new("w1");

        assert_eq!(controller.select_answer(&w1, AnswerValue::Scale(2)).unwrap(), None);
        assert_eq!(
            controller.select_answer(&w1, AnswerValue::Scale(4)).unwrap(),
            Some(AnswerValue::Scale(2))
        );
        assert_eq!(controller.current_answer(), Some(&AnswerValue::Scale(4)));
        assert_eq!(controller.answers().len(), 1);
    }

    #[test]
    fn go_back_keeps_answers() {
        let mut controller = controller(SectionId::Psychometric);
        assert_eq!(controller.go_back().unwrap(), 0);

        answer_current(&mut controller);
        controller.advance().unwrap();
        answer_current(&mut controller);

        assert_eq!(controller.go_back().unwrap(), 0);
        assert!(controller.current_answer().is_some());
        controller.advance().unwrap();
        assert_eq!(controller.current_index(), 1);
        assert!(controller.current_answer().is_some());
        assert_eq!(controller.answers().len(), 2);
    }

    #[test]
    fn completed_section_rejects_further_calls() {
        let mut controller = controller(SectionId::Technical);
        let bundle = loop {
            answer_current(&mut controller);
            if let SectionStep::Completed(bundle) = controller.advance().unwrap() {
                break bundle;
            }
        };
        assert_eq!(bundle.len(), 6);
        assert!(controller.is_completed());
        assert!(controller.current_question().is_none());
        assert_eq!(controller.advance().unwrap_err(), SectionError::Completed);
        assert_eq!(controller.go_back().unwrap_err(), SectionError::Completed);
        assert_eq!(
            controller
                .select_answer(&QuestionId::new("t6"), AnswerValue::Choice(OptionId::new(1)))
                .unwrap_err(),
            SectionError::Completed
        );
        assert!((controller.progress().completion_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn with_answers_resumes_at_first_gap() {
        let questions = Catalog::standard().section(SectionId::Psychometric).clone();
        let mut bundle = AnswerBundle::new(SectionId::Psychometric);
        bundle.record(QuestionId::new("p1"), AnswerValue::Choice(OptionId::new(2)));
        bundle.record(QuestionId::new("p2"), AnswerValue::Choice(OptionId::new(1)));

        let controller = SectionController::with_answers(questions, bundle).unwrap();
        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.answers().len(), 2);
    }

    #[test]
    fn with_answers_rejects_foreign_bundles() {
        let questions = Catalog::standard().section(SectionId::Psychometric).clone();

        let err = SectionController::with_answers(
            questions.clone(),
            AnswerBundle::new(SectionId::Wiscar),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SectionError::Bundle(BundleError::SectionMismatch { .. })
        ));

        let mut bundle = AnswerBundle::new(SectionId::Psychometric);
        bundle.record(QuestionId::new("p1"), AnswerValue::Choice(OptionId::new(9)));
        let err = SectionController::with_answers(questions, bundle).unwrap_err();
        assert!(matches!(
            err,
            SectionError::Answer(AnswerError::UnknownOption { .. })
        ));
    }
}
