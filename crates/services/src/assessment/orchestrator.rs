use std::collections::BTreeMap;

use log::{debug, info, warn};
use readiness_core::catalog::Catalog;
use readiness_core::model::{
    AnswerBundle, AssessmentBundle, BundleError, CompletedAssessment, SectionId,
};

use crate::error::AssessmentError;
use crate::sections::SectionController;

/// Outcome of completing a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentStep {
    /// The assessment moved on to this section.
    Next(SectionId),
    /// Every section is done; hand this to the results stage.
    Finished(CompletedAssessment),
}

/// Where the assessment stands, for the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentProgress {
    pub current: SectionId,
    /// One-based position of the current section.
    pub position: usize,
    pub total: usize,
    pub completed: Vec<SectionId>,
}

impl AssessmentProgress {
    /// `position / total`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        self.position as f64 / self.total as f64
    }
}

/// Sequences the three sections and merges their answers.
///
/// Sections run in the fixed order of [`SectionId::ALL`]. Completing a section
/// stores its answers (last write wins); completing the final section hands a
/// [`CompletedAssessment`] to the caller and ends the assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessmentOrchestrator {
    current: usize,
    bundle: AssessmentBundle,
    /// Answers of sections left before they were completed.
    in_progress: BTreeMap<SectionId, AnswerBundle>,
    finished: bool,
}

impl AssessmentOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_section(&self) -> SectionId {
        SectionId::ALL[self.current]
    }

    /// One-based position of the current section.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        SectionId::ALL.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn progress(&self) -> AssessmentProgress {
        AssessmentProgress {
            current: self.current_section(),
            position: self.position(),
            total: self.section_count(),
            completed: SectionId::ALL
                .into_iter()
                .filter(|section| self.bundle.contains(*section))
                .collect(),
        }
    }

    /// Answers stored for `section` by an earlier completion.
    #[must_use]
    pub fn recorded_answers(&self, section: SectionId) -> Option<&AnswerBundle> {
        self.bundle.get(section)
    }

    /// Controller for the current section, resumed with any recorded answers.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Finished` after the last section completed, and
    /// `AssessmentError::Section` if the recorded answers no longer fit the catalog.
    pub fn open_section(&self, catalog: &Catalog) -> Result<SectionController, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::Finished);
        }
        let section = self.current_section();
        let questions = catalog.section(section).clone();
        let saved = self
            .in_progress
            .get(&section)
            .or_else(|| self.bundle.get(section));
        let controller = match saved {
            Some(answers) => SectionController::with_answers(questions, answers.clone())?,
            None => SectionController::new(questions),
        };
        Ok(controller)
    }

    /// Store a completed section's answers and move on.
    ///
    /// # Errors
    ///
    /// - `AssessmentError::Finished` once the assessment is over
    /// - `AssessmentError::Bundle` if `answers` belongs to another section
    /// - `AssessmentError::MissingSections` if the last section completes while
    ///   earlier ones were never completed; the answers are still stored
    pub fn on_section_complete(
        &mut self,
        section: SectionId,
        answers: AnswerBundle,
    ) -> Result<AssessmentStep, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::Finished);
        }
        if answers.section() != section {
            return Err(BundleError::SectionMismatch {
                expected: section,
                found: answers.section(),
            }
            .into());
        }

        self.in_progress.remove(&section);
        if self.bundle.insert(answers).is_some() {
            debug!("section {section} answers replaced");
        }

        if let Some(next) = section.next() {
            self.current = next.index();
            info!("section {section} complete, moving to {next}");
            return Ok(AssessmentStep::Next(next));
        }

        let missing = self.bundle.missing_sections();
        if !missing.is_empty() {
            warn!("cannot finish assessment, missing sections {missing:?}");
            return Err(AssessmentError::MissingSections { missing });
        }

        let completed = CompletedAssessment::try_from(std::mem::take(&mut self.bundle))?;
        self.finished = true;
        info!("assessment finished");
        Ok(AssessmentStep::Finished(completed))
    }

    /// Keep the current section's unfinished answers so that reopening the
    /// section resumes them.
    ///
    /// # Errors
    ///
    /// - `AssessmentError::Finished` once the assessment is over
    /// - `AssessmentError::Bundle` if `answers` belongs to another section
    pub fn save_in_progress(&mut self, answers: AnswerBundle) -> Result<(), AssessmentError> {
        if self.finished {
            return Err(AssessmentError::Finished);
        }
        let section = self.current_section();
        if answers.section() != section {
            return Err(BundleError::SectionMismatch {
                expected: section,
                found: answers.section(),
            }
            .into());
        }
        debug!("keeping {} unfinished answers for {section}", answers.len());
        self.in_progress.insert(section, answers);
        Ok(())
    }

    /// Step back one section, keeping every recorded answer.
    ///
    /// # Errors
    ///
    /// - `AssessmentError::AtFirstSection` on the first section
    /// - `AssessmentError::Finished` once the assessment is over
    pub fn go_to_previous_section(&mut self) -> Result<SectionId, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::Finished);
        }
        let previous = self
            .current_section()
            .previous()
            .ok_or(AssessmentError::AtFirstSection)?;
        self.current = previous.index();
        debug!("back to section {previous}");
        Ok(previous)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::model::{AnswerValue, OptionId, QuestionId};

    fn bundle(section: SectionId) -> AnswerBundle {
        let mut answers = AnswerBundle::new(section);
        let id = match section {
            SectionId::Psychometric => "p1",
            SectionId::Technical => "t1",
            SectionId::Wiscar => "w2",
        };
        answers.record(QuestionId::new(id), AnswerValue::Choice(OptionId::new(1)));
        answers
    }

    #[test]
    fn walks_sections_in_order() {
        let mut orchestrator = AssessmentOrchestrator::new();
        assert_eq!(orchestrator.current_section(), SectionId::Psychometric);
        assert_eq!(orchestrator.progress().position, 1);

        let step = orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Psychometric))
            .unwrap();
        assert_eq!(step, AssessmentStep::Next(SectionId::Technical));
        assert_eq!(orchestrator.position(), 2);

        orchestrator
            .on_section_complete(SectionId::Technical, bundle(SectionId::Technical))
            .unwrap();
        let step = orchestrator
            .on_section_complete(SectionId::Wiscar, bundle(SectionId::Wiscar))
            .unwrap();
        let AssessmentStep::Finished(completed) = step else {
            panic!("expected finished assessment");
        };
        assert_eq!(AssessmentBundle::from(completed).len(), 3);
        assert!(orchestrator.is_finished());

        let err = orchestrator
            .on_section_complete(SectionId::Wiscar, bundle(SectionId::Wiscar))
            .unwrap_err();
        assert_eq!(err, AssessmentError::Finished);
    }

    #[test]
    fn previous_section_fails_on_first() {
        let mut orchestrator = AssessmentOrchestrator::new();
        assert_eq!(
            orchestrator.go_to_previous_section().unwrap_err(),
            AssessmentError::AtFirstSection
        );

        orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Psychometric))
            .unwrap();
        assert_eq!(
            orchestrator.go_to_previous_section().unwrap(),
            SectionId::Psychometric
        );
        assert!(orchestrator.recorded_answers(SectionId::Psychometric).is_some());
    }

    #[test]
    fn last_section_with_gaps_is_rejected() {
        let mut orchestrator = AssessmentOrchestrator::new();
        let err = orchestrator
            .on_section_complete(SectionId::Wiscar, bundle(SectionId::Wiscar))
            .unwrap_err();
        assert_eq!(
            err,
            AssessmentError::MissingSections {
                missing: vec![SectionId::Psychometric, SectionId::Technical]
            }
        );
        assert!(!orchestrator.is_finished());
        assert!(orchestrator.recorded_answers(SectionId::Wiscar).is_some());
    }

    #[test]
    fn mismatched_bundle_is_rejected() {
        let mut orchestrator = AssessmentOrchestrator::new();
        let err = orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Technical))
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::Bundle(BundleError::SectionMismatch { .. })
        ));
        assert_eq!(orchestrator.current_section(), SectionId::Psychometric);
    }

    #[test]
    fn open_section_resumes_recorded_answers() {
        let catalog = Catalog::standard();
        let mut orchestrator = AssessmentOrchestrator::new();

        let fresh = orchestrator.open_section(&catalog).unwrap();
        assert!(fresh.answers().is_empty());

        orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Psychometric))
            .unwrap();
        orchestrator.go_to_previous_section().unwrap();

        let resumed = orchestrator.open_section(&catalog).unwrap();
        assert_eq!(resumed.section(), SectionId::Psychometric);
        assert_eq!(resumed.answers().len(), 1);
        assert_eq!(resumed.current_index(), 1);
    }

    #[test]
    fn unfinished_answers_survive_stepping_back() {
        let catalog = Catalog::standard();
        let mut orchestrator = AssessmentOrchestrator::new();
        orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Psychometric))
            .unwrap();

        assert!(matches!(
            orchestrator.save_in_progress(bundle(SectionId::Psychometric)),
            Err(AssessmentError::Bundle(BundleError::SectionMismatch { .. }))
        ));
        orchestrator
            .save_in_progress(bundle(SectionId::Technical))
            .unwrap();
        orchestrator.go_to_previous_section().unwrap();
        orchestrator
            .on_section_complete(SectionId::Psychometric, bundle(SectionId::Psychometric))
            .unwrap();

        let resumed = orchestrator.open_section(&catalog).unwrap();
        assert_eq!(resumed.section(), SectionId::Technical);
        assert_eq!(resumed.answers(), &bundle(SectionId::Technical));
        assert_eq!(resumed.current_index(), 1);
        assert!(orchestrator.recorded_answers(SectionId::Technical).is_none());
        assert!(!orchestrator.progress().completed.contains(&SectionId::Technical));
    }
}
