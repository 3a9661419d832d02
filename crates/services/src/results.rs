use log::info;
use readiness_core::model::{CompletedAssessment, ScoreReport};
use readiness_core::scoring::{ResultsCalculator, ScoringPolicy};

use crate::error::ResultsError;

/// Boundary call from the assessment flow into scoring.
#[derive(Debug, Clone)]
pub struct ResultsService {
    calculator: ResultsCalculator,
}

impl ResultsService {
    #[must_use]
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            calculator: ResultsCalculator::new(policy),
        }
    }

    #[must_use]
    pub fn with_calculator(calculator: ResultsCalculator) -> Self {
        Self { calculator }
    }

    #[must_use]
    pub fn policy(&self) -> &ScoringPolicy {
        self.calculator.policy()
    }

    #[must_use]
    pub fn score(&self, assessment: &CompletedAssessment) -> ScoreReport {
        let report = self.calculator.calculate(assessment);
        info!(
            "assessment scored: overall={} tier={:?}",
            report.overall, report.tier
        );
        report
    }

    /// Pretty-printed JSON for the report download.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::Export` if serialization fails.
    pub fn export_json(&self, report: &ScoreReport) -> Result<String, ResultsError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl Default for ResultsService {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}
