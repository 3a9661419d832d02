use readiness_core::model::{CompletedAssessment, RecommendationTier, ScoreReport};
use services::ResultsService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub label: &'static str,
    pub score: u8,
    pub caption: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareerPathVm {
    pub title: String,
    pub match_label: String,
    pub match_percent: u8,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub overall: u8,
    pub tier_label: &'static str,
    pub tier_class: &'static str,
    pub tier_summary: &'static str,
    pub sections: Vec<ScoreRowVm>,
    pub technical_categories: Vec<ScoreRowVm>,
    pub wiscar: Vec<ScoreRowVm>,
    pub career_paths: Vec<CareerPathVm>,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub next_steps: Vec<String>,
    pub closing_message: String,
    report: ScoreReport,
}

impl ResultsVm {
    #[must_use]
    pub fn new(report: ScoreReport) -> Self {
        Self {
            overall: report.overall,
            tier_label: report.tier.label(),
            tier_class: tier_class(report.tier),
            tier_summary: report.tier.summary(),
            sections: vec![
                ScoreRowVm {
                    label: "Psychometric Evaluation",
                    score: report.psychometric,
                    caption: Some("Personality traits and motivational alignment"),
                },
                ScoreRowVm {
                    label: "Technical Readiness",
                    score: report.technical,
                    caption: Some("Skills and domain knowledge assessment"),
                },
            ],
            technical_categories: report
                .technical_categories
                .iter()
                .map(|c| ScoreRowVm {
                    label: c.category.label(),
                    score: c.score,
                    caption: None,
                })
                .collect(),
            wiscar: report
                .wiscar
                .iter()
                .map(|(dimension, score)| ScoreRowVm {
                    label: dimension.label(),
                    score,
                    caption: None,
                })
                .collect(),
            career_paths: report
                .career_paths
                .iter()
                .map(|path| CareerPathVm {
                    title: path.title.clone(),
                    match_label: format!("{}% match", path.match_percent),
                    match_percent: path.match_percent,
                    description: path.description.clone(),
                })
                .collect(),
            strengths: report.strengths.clone(),
            development_areas: report.development_areas.clone(),
            next_steps: report.next_steps.clone(),
            closing_message: closing_message(report.tier),
            report,
        }
    }

    #[must_use]
    pub fn report(&self) -> &ScoreReport {
        &self.report
    }
}

fn tier_class(tier: RecommendationTier) -> &'static str {
    match tier {
        RecommendationTier::Pursue => "tier pursue",
        RecommendationTier::Consider => "tier consider",
        RecommendationTier::Develop => "tier develop",
    }
}

fn closing_message(tier: RecommendationTier) -> String {
    let potential = match tier {
        RecommendationTier::Pursue => "excellent",
        RecommendationTier::Consider => "good",
        RecommendationTier::Develop => "real",
    };
    format!(
        "Based on your results, you have {potential} potential for a career in Legal UX. \
         Take the next step in your professional development."
    )
}

/// What the results screen should do when it opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsEntry {
    /// No finished assessment was handed over; go back to the landing page.
    Redirect,
    Ready(Box<ResultsVm>),
}

#[must_use]
pub fn results_entry(
    completed: Option<CompletedAssessment>,
    results: &ResultsService,
) -> ResultsEntry {
    match completed {
        Some(assessment) => ResultsEntry::Ready(Box::new(ResultsVm::new(
            results.score(&assessment),
        ))),
        None => ResultsEntry::Redirect,
    }
}
