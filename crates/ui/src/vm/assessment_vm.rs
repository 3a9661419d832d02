use log::debug;
use readiness_core::model::{
    AnswerModality, AnswerValue, CompletedAssessment, OptionId, Question, SectionId,
};
use services::{
    AssessmentOrchestrator, AssessmentStep, Catalog, SectionController, SectionProgress,
    SectionStep,
};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Choose(u8),
    Rate(i32),
    Advance,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentOutcome {
    Continue,
    Finished(CompletedAssessment),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: u8,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInputVm {
    Choice(Vec<OptionVm>),
    Scale {
        min: i32,
        max: i32,
        value: Option<i32>,
        min_label: String,
        max_label: String,
        value_label: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: String,
    pub text: String,
    pub tag_label: &'static str,
    pub input: AnswerInputVm,
    /// Shown once the question has an answer.
    pub explanation: Option<String>,
}

impl QuestionVm {
    fn new(question: &Question, answer: Option<&AnswerValue>) -> Self {
        let input = match question.modality() {
            AnswerModality::Choice { options } => AnswerInputVm::Choice(
                options
                    .iter()
                    .map(|option| OptionVm {
                        id: option.id.value(),
                        label: option.label.clone(),
                        selected: answer == Some(&AnswerValue::Choice(option.id)),
                    })
                    .collect(),
            ),
            AnswerModality::Scale { bounds } => {
                let value = match answer {
                    Some(AnswerValue::Scale(v)) => Some(*v),
                    _ => None,
                };
                AnswerInputVm::Scale {
                    min: bounds.min(),
                    max: bounds.max(),
                    value,
                    min_label: bounds.label_for(bounds.min()).unwrap_or_default().to_string(),
                    max_label: bounds.label_for(bounds.max()).unwrap_or_default().to_string(),
                    value_label: value
                        .and_then(|v| bounds.label_for(v))
                        .map(str::to_string),
                }
            }
        };

        Self {
            id: question.id().as_str().to_string(),
            text: question.text().to_string(),
            tag_label: question.tag().label(),
            input,
            explanation: answer
                .and_then(|_| question.explanation())
                .map(str::to_string),
        }
    }
}

/// One entry of the section stepper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionStepVm {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub state: StepState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

impl StepState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "step done",
            Self::Current => "step current",
            Self::Upcoming => "step upcoming",
        }
    }
}

/// Drives the assessment screen: one orchestrator plus the controller of the
/// section on screen.
pub struct AssessmentVm {
    catalog: Catalog,
    orchestrator: AssessmentOrchestrator,
    controller: SectionController,
}

impl AssessmentVm {
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the first section cannot be opened.
    pub fn start(catalog: Catalog) -> Result<Self, ViewError> {
        let orchestrator = AssessmentOrchestrator::new();
        let controller = orchestrator.open_section(&catalog)?;
        Ok(Self {
            catalog,
            orchestrator,
            controller,
        })
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.controller.section()
    }

    #[must_use]
    pub fn section_label(&self) -> String {
        format!(
            "Section {} of {}",
            self.orchestrator.position(),
            self.orchestrator.section_count()
        )
    }

    /// Overall progress through the sections, in whole percent.
    #[must_use]
    pub fn assessment_percent(&self) -> u32 {
        percent(self.orchestrator.progress().ratio())
    }

    #[must_use]
    pub fn steps(&self) -> Vec<SectionStepVm> {
        let current = self.orchestrator.current_section();
        SectionId::ALL
            .into_iter()
            .map(|section| SectionStepVm {
                number: section.index() + 1,
                title: section.title(),
                description: section.description(),
                state: match section.index().cmp(&current.index()) {
                    std::cmp::Ordering::Less => StepState::Done,
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                },
            })
            .collect()
    }

    #[must_use]
    pub fn section_progress(&self) -> SectionProgress {
        self.controller.progress()
    }

    #[must_use]
    pub fn question_label(&self) -> String {
        let progress = self.controller.progress();
        format!("Question {} of {}", progress.position(), progress.total)
    }

    #[must_use]
    pub fn section_percent(&self) -> u32 {
        percent(self.controller.progress().completion_ratio())
    }

    #[must_use]
    pub fn answered_label(&self) -> String {
        let progress = self.controller.progress();
        format!("{} of {} questions answered", progress.answered, progress.total)
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        self.controller
            .current_question()
            .map(|question| QuestionVm::new(question, self.controller.current_answer()))
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.controller.can_advance()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.controller.current_index() > 0 || self.orchestrator.position() > 1
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.controller.is_last_question() {
            "Complete Section"
        } else {
            "Next Question"
        }
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidAnswer` for answers that do not fit the
    /// current question and `ViewError::Unanswered` when advancing too early.
    pub fn apply(&mut self, intent: AssessmentIntent) -> Result<AssessmentOutcome, ViewError> {
        match intent {
            AssessmentIntent::Choose(option) => {
                self.select(AnswerValue::Choice(OptionId::new(option)))?;
            }
            AssessmentIntent::Rate(value) => self.select(AnswerValue::Scale(value))?,
            AssessmentIntent::Advance => return self.advance(),
            AssessmentIntent::Back => self.go_back()?,
        }
        Ok(AssessmentOutcome::Continue)
    }

    fn select(&mut self, value: AnswerValue) -> Result<(), ViewError> {
        let question_id = self
            .controller
            .current_question()
            .map(|question| question.id().clone())
            .ok_or(ViewError::Unknown)?;
        self.controller.select_answer(&question_id, value)?;
        Ok(())
    }

    fn advance(&mut self) -> Result<AssessmentOutcome, ViewError> {
        let SectionStep::Completed(answers) = self.controller.advance()? else {
            return Ok(AssessmentOutcome::Continue);
        };

        match self
            .orchestrator
            .on_section_complete(self.controller.section(), answers)?
        {
            AssessmentStep::Next(section) => {
                debug!("opening section {section}");
                self.controller = self.orchestrator.open_section(&self.catalog)?;
                Ok(AssessmentOutcome::Continue)
            }
            AssessmentStep::Finished(completed) => Ok(AssessmentOutcome::Finished(completed)),
        }
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        if self.controller.current_index() > 0 {
            self.controller.go_back()?;
            return Ok(());
        }
        if self.orchestrator.position() > 1 {
            self.orchestrator
                .save_in_progress(self.controller.answers().clone())?;
            self.orchestrator.go_to_previous_section()?;
            self.controller = self.orchestrator.open_section(&self.catalog)?;
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_and_advance(vm: &mut AssessmentVm) -> AssessmentOutcome {
        let question = vm.question().unwrap();
        let intent = match question.input {
            AnswerInputVm::Choice(options) => AssessmentIntent::Choose(options[0].id),
            AnswerInputVm::Scale { max, .. } => AssessmentIntent::Rate(max),
        };
        vm.apply(intent).unwrap();
        vm.apply(AssessmentIntent::Advance).unwrap()
    }

    #[test]
    fn starts_on_first_psychometric_question() {
        let vm = AssessmentVm::start(Catalog::standard()).unwrap();
        assert_eq!(vm.section(), SectionId::Psychometric);
        assert_eq!(vm.section_label(), "Section 1 of 3");
        assert_eq!(vm.assessment_percent(), 33);
        assert_eq!(vm.question_label(), "Question 1 of 6");
        assert!(!vm.can_advance());
        assert!(!vm.can_go_back());
        assert_eq!(vm.steps()[0].state, StepState::Current);
    }

    #[test]
    fn advancing_unanswered_is_reported() {
        let mut vm = AssessmentVm::start(Catalog::standard()).unwrap();
        assert_eq!(
            vm.apply(AssessmentIntent::Advance).unwrap_err(),
            ViewError::Unanswered
        );
        assert_eq!(
            vm.apply(AssessmentIntent::Rate(3)).unwrap_err(),
            ViewError::InvalidAnswer
        );
    }

    #[test]
    fn explanation_appears_after_answering() {
        let mut vm = AssessmentVm::start(Catalog::standard()).unwrap();
        for _ in 0..6 {
            answer_and_advance(&mut vm);
        }
        assert_eq!(vm.section(), SectionId::Technical);
        assert!(vm.question().unwrap().explanation.is_none());

        vm.apply(AssessmentIntent::Choose(2)).unwrap();
        let question = vm.question().unwrap();
        assert!(question.explanation.is_some());
        let AnswerInputVm::Choice(options) = question.input else {
            panic!("technical questions are single choice");
        };
        assert!(options[1].selected);
    }

    #[test]
    fn back_from_first_question_reopens_previous_section() {
        let mut vm = AssessmentVm::start(Catalog::standard()).unwrap();
        for _ in 0..6 {
            answer_and_advance(&mut vm);
        }
        assert!(vm.can_go_back());
        vm.apply(AssessmentIntent::Back).unwrap();
        assert_eq!(vm.section(), SectionId::Psychometric);
        assert_eq!(vm.question_label(), "Question 6 of 6");
        assert!(vm.can_advance());
    }

    #[test]
    fn answers_survive_a_trip_to_the_previous_section() {
        let mut vm = AssessmentVm::start(Catalog::standard()).unwrap();
        for _ in 0..6 {
            answer_and_advance(&mut vm);
        }
        vm.apply(AssessmentIntent::Choose(2)).unwrap();
        vm.apply(AssessmentIntent::Back).unwrap();
        assert_eq!(vm.section(), SectionId::Psychometric);

        vm.apply(AssessmentIntent::Advance).unwrap();
        assert_eq!(vm.section(), SectionId::Technical);
        assert_eq!(vm.section_progress().answered, 1);
        assert_eq!(vm.question_label(), "Question 2 of 6");

        vm.apply(AssessmentIntent::Back).unwrap();
        let AnswerInputVm::Choice(options) = vm.question().unwrap().input else {
            panic!("technical questions are single choice");
        };
        assert!(options[1].selected);
    }

    #[test]
    fn walking_every_section_finishes() {
        let mut vm = AssessmentVm::start(Catalog::standard()).unwrap();
        let mut outcome = AssessmentOutcome::Continue;
        for _ in 0..21 {
            outcome = answer_and_advance(&mut vm);
        }
        let AssessmentOutcome::Finished(completed) = outcome else {
            panic!("assessment should finish after 21 questions");
        };
        assert_eq!(completed.wiscar().len(), 9);
    }
}
