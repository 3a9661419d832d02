use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{
    AnswerBundle, CareerPathMatch, CategoryScore, CompletedAssessment, QuestionSet, QuestionTag,
    RecommendationTier, ScoreReport, SectionId, TechnicalCategory, WiscarDimension, WiscarScores,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("section weights must be finite and non-negative, got {weights:?}")]
    InvalidWeight { weights: SectionWeights },
    #[error("section weights must sum to 1, got {sum}")]
    WeightSum { sum: f64 },
    #[error("tier thresholds must satisfy consider <= pursue <= 100, got pursue={pursue}, consider={consider}")]
    InvalidThresholds { pursue: u8, consider: u8 },
}

//
// ─── POLICY ────────────────────────────────────────────────────────────────────
//

/// Section weights shipped with the product.
pub const DEFAULT_WEIGHTS: SectionWeights = SectionWeights {
    psychometric: 0.3,
    technical: 0.3,
    wiscar: 0.4,
};

/// Tier thresholds shipped with the product.
pub const DEFAULT_THRESHOLDS: TierThresholds = TierThresholds {
    pursue: 80,
    consider: 65,
};

/// Scores at or above this are reported as strengths.
pub const STRENGTH_THRESHOLD: u8 = 75;

/// Scores below this are reported as development areas.
pub const GAP_THRESHOLD: u8 = 60;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weights of the three sections in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionWeights {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: f64,
}

/// Lower bounds (inclusive) of the `Pursue` and `Consider` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub pursue: u8,
    pub consider: u8,
}

/// Weights and thresholds the calculator applies.
///
/// # Examples
///
/// ```
/// # use readiness_core::scoring::{ScoringPolicy, SectionWeights, TierThresholds};
/// # use readiness_core::model::RecommendationTier;
/// let policy = ScoringPolicy::try_new(
///     SectionWeights { psychometric: 0.25, technical: 0.25, wiscar: 0.5 },
///     TierThresholds { pursue: 85, consider: 70 },
/// )?;
/// assert_eq!(policy.tier_for(85), RecommendationTier::Pursue);
/// assert_eq!(policy.tier_for(84), RecommendationTier::Consider);
/// # Ok::<(), readiness_core::scoring::ScoringError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    weights: SectionWeights,
    thresholds: TierThresholds,
}

impl ScoringPolicy {
    /// # Errors
    ///
    /// - `InvalidWeight` if any weight is negative or not finite
    /// - `WeightSum` if the weights do not sum to 1
    /// - `InvalidThresholds` unless `consider <= pursue <= 100`
    pub fn try_new(
        weights: SectionWeights,
        thresholds: TierThresholds,
    ) -> Result<Self, ScoringError> {
        let parts = [weights.psychometric, weights.technical, weights.wiscar];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ScoringError::InvalidWeight { weights });
        }
        let sum: f64 = parts.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ScoringError::WeightSum { sum });
        }
        if thresholds.consider > thresholds.pursue || thresholds.pursue > 100 {
            return Err(ScoringError::InvalidThresholds {
                pursue: thresholds.pursue,
                consider: thresholds.consider,
            });
        }
        Ok(Self {
            weights,
            thresholds,
        })
    }

    #[must_use]
    pub fn weights(&self) -> SectionWeights {
        self.weights
    }

    #[must_use]
    pub fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    /// Step function from the overall score to a tier.
    #[must_use]
    pub fn tier_for(&self, overall: u8) -> RecommendationTier {
        if overall >= self.thresholds.pursue {
            RecommendationTier::Pursue
        } else if overall >= self.thresholds.consider {
            RecommendationTier::Consider
        } else {
            RecommendationTier::Develop
        }
    }

    /// `round(w_p·psychometric + w_t·technical + w_w·mean(wiscar))`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn overall(&self, psychometric: u8, technical: u8, wiscar: &WiscarScores) -> u8 {
        let weighted = self.weights.psychometric * f64::from(psychometric)
            + self.weights.technical * f64::from(technical)
            + self.weights.wiscar * wiscar.mean();
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

//
// ─── CALCULATOR ────────────────────────────────────────────────────────────────
//

/// Turns a completed assessment into a [`ScoreReport`].
///
/// The calculation is a pure function of its input: no randomness, no clock.
///
/// # Examples
///
/// ```
/// # use readiness_core::scoring::{ResultsCalculator, ScoringPolicy};
/// let calculator = ResultsCalculator::new(ScoringPolicy::default());
/// assert_eq!(calculator.policy().thresholds().pursue, 80);
/// ```
#[derive(Debug, Clone)]
pub struct ResultsCalculator {
    policy: ScoringPolicy,
    catalog: Catalog,
}

impl ResultsCalculator {
    /// Calculator over the built-in question bank.
    #[must_use]
    pub fn new(policy: ScoringPolicy) -> Self {
        Self::with_catalog(policy, Catalog::standard())
    }

    #[must_use]
    pub fn with_catalog(policy: ScoringPolicy, catalog: Catalog) -> Self {
        Self { policy, catalog }
    }

    #[must_use]
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn calculate(&self, assessment: &CompletedAssessment) -> ScoreReport {
        let psychometric = fit_score(
            self.catalog.section(SectionId::Psychometric),
            assessment.psychometric(),
            |_| true,
        );

        let technical_set = self.catalog.section(SectionId::Technical);
        let technical = correct_score(technical_set, assessment.technical(), |_| true);
        let technical_categories: Vec<CategoryScore> = technical_set
            .tags()
            .into_iter()
            .filter_map(|tag| match tag {
                QuestionTag::Technical(category) => Some(CategoryScore {
                    category,
                    score: correct_score(technical_set, assessment.technical(), |t| t == tag),
                }),
                _ => None,
            })
            .collect();

        let wiscar_set = self.catalog.section(SectionId::Wiscar);
        let dimension = |d: WiscarDimension| {
            fit_score(wiscar_set, assessment.wiscar(), |t| t == QuestionTag::Wiscar(d))
        };
        let wiscar = WiscarScores {
            will: dimension(WiscarDimension::Will),
            interest: dimension(WiscarDimension::Interest),
            skill: dimension(WiscarDimension::Skill),
            cognitive: dimension(WiscarDimension::Cognitive),
            ability: dimension(WiscarDimension::Ability),
            real_world: dimension(WiscarDimension::RealWorld),
        };

        let overall = self.policy.overall(psychometric, technical, &wiscar);
        let tier = self.policy.tier_for(overall);

        let traits = trait_scores(&technical_categories, &wiscar);
        let strengths = strengths(&traits);
        let gaps = gaps(&traits);

        let mut next_steps: Vec<String> = gaps.iter().map(|(t, _)| t.next_step().to_string()).collect();
        next_steps.push(tier_step(tier).to_string());

        let signals = Signals {
            psychometric,
            technical: &technical_categories,
            wiscar: &wiscar,
        };
        let career_paths = rank_career_paths(&signals);

        ScoreReport {
            psychometric,
            technical,
            technical_categories,
            wiscar,
            overall,
            tier,
            strengths: strengths.iter().map(|(t, _)| t.strength().to_string()).collect(),
            development_areas: gaps.iter().map(|(t, _)| t.gap().to_string()).collect(),
            next_steps,
            career_paths,
        }
    }
}

//
// ─── SECTION SCORES ────────────────────────────────────────────────────────────
//

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[allow(clippy::cast_precision_loss)]
fn mean_ratio(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Mean target-profile fit over the matching questions; unanswered counts as 0.
fn fit_score(set: &QuestionSet, answers: &AnswerBundle, include: impl Fn(QuestionTag) -> bool) -> u8 {
    let mut sum = 0.0;
    let mut count = 0;
    for question in set.iter().filter(|q| include(q.tag())) {
        count += 1;
        if let Some(value) = answers.get(question.id()) {
            sum += question.fit_ratio(value);
        }
    }
    to_percent(mean_ratio(sum, count))
}

/// Share of matching questions answered correctly.
fn correct_score(
    set: &QuestionSet,
    answers: &AnswerBundle,
    include: impl Fn(QuestionTag) -> bool,
) -> u8 {
    let mut correct = 0.0;
    let mut count = 0;
    for question in set.iter().filter(|q| include(q.tag())) {
        count += 1;
        if answers.get(question.id()).is_some_and(|v| question.is_correct(v)) {
            correct += 1.0;
        }
    }
    to_percent(mean_ratio(correct, count))
}

//
// ─── INSIGHTS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trait {
    Category(TechnicalCategory),
    Dimension(WiscarDimension),
}

impl Trait {
    fn strength(self) -> &'static str {
        match self {
            Self::Category(TechnicalCategory::UxFundamentals) => "Sound grasp of UX fundamentals",
            Self::Category(TechnicalCategory::LegalKnowledge) => "Working legal domain knowledge",
            Self::Category(TechnicalCategory::Analytical) => "Research-first problem solving",
            Self::Category(TechnicalCategory::Practical) => "Practical judgement for legal interfaces",
            Self::Dimension(WiscarDimension::Will) => "Strong drive and persistence",
            Self::Dimension(WiscarDimension::Interest) => "Genuine curiosity about legal workflows",
            Self::Dimension(WiscarDimension::Skill) => "Solid existing UX and domain skills",
            Self::Dimension(WiscarDimension::Cognitive) => "Strong analytical thinking",
            Self::Dimension(WiscarDimension::Ability) => "Openness to feedback and learning",
            Self::Dimension(WiscarDimension::RealWorld) => "Clear alignment with Legal UX work",
        }
    }

    fn gap(self) -> &'static str {
        match self {
            Self::Category(TechnicalCategory::UxFundamentals) => "UX design fundamentals",
            Self::Category(TechnicalCategory::LegalKnowledge) => "Legal domain knowledge",
            Self::Category(TechnicalCategory::Analytical) => "Analytical reasoning about user problems",
            Self::Category(TechnicalCategory::Practical) => "Applied design for legal documents",
            Self::Dimension(WiscarDimension::Will) => "Sustaining motivation through long projects",
            Self::Dimension(WiscarDimension::Interest) => "Engagement with the legal domain",
            Self::Dimension(WiscarDimension::Skill) => "Hands-on UX and legal workflow skills",
            Self::Dimension(WiscarDimension::Cognitive) => "Structured problem analysis",
            Self::Dimension(WiscarDimension::Ability) => "Feedback-driven learning habits",
            Self::Dimension(WiscarDimension::RealWorld) => "Clarity on Legal UX career fit",
        }
    }

    fn next_step(self) -> &'static str {
        match self {
            Self::Category(TechnicalCategory::UxFundamentals) => "Complete a UX fundamentals course",
            Self::Category(TechnicalCategory::LegalKnowledge) => {
                "Study legal industry workflows and terminology"
            }
            Self::Category(TechnicalCategory::Analytical) => {
                "Practice research-led problem framing on legal tech case studies"
            }
            Self::Category(TechnicalCategory::Practical) => {
                "Redesign a contract review workflow as a portfolio piece"
            }
            Self::Dimension(WiscarDimension::Will) => {
                "Set milestone-based goals for a long-running design project"
            }
            Self::Dimension(WiscarDimension::Interest) => {
                "Read a legal technology case study every week"
            }
            Self::Dimension(WiscarDimension::Skill) => "Build a portfolio with legal domain projects",
            Self::Dimension(WiscarDimension::Cognitive) => {
                "Practice breaking complex workflows into user journeys"
            }
            Self::Dimension(WiscarDimension::Ability) => {
                "Ask for structured feedback on every design iteration"
            }
            Self::Dimension(WiscarDimension::RealWorld) => "Network with legal tech professionals",
        }
    }
}

fn trait_scores(categories: &[CategoryScore], wiscar: &WiscarScores) -> Vec<(Trait, u8)> {
    categories
        .iter()
        .map(|c| (Trait::Category(c.category), c.score))
        .chain(wiscar.iter().map(|(d, score)| (Trait::Dimension(d), score)))
        .collect()
}

/// Traits at or above the strength threshold, highest first.
fn strengths(traits: &[(Trait, u8)]) -> Vec<(Trait, u8)> {
    let mut out: Vec<_> = traits
        .iter()
        .copied()
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Traits below the gap threshold, weakest first.
fn gaps(traits: &[(Trait, u8)]) -> Vec<(Trait, u8)> {
    let mut out: Vec<_> = traits
        .iter()
        .copied()
        .filter(|(_, score)| *score < GAP_THRESHOLD)
        .collect();
    out.sort_by(|a, b| a.1.cmp(&b.1));
    out
}

fn tier_step(tier: RecommendationTier) -> &'static str {
    match tier {
        RecommendationTier::Pursue => "Apply for Legal UX roles and internships",
        RecommendationTier::Consider => "Take on a small legal tech project to test your fit",
        RecommendationTier::Develop => "Start with a foundational UX course before specialising",
    }
}

//
// ─── CAREER PATHS ──────────────────────────────────────────────────────────────
//

struct Signals<'a> {
    psychometric: u8,
    technical: &'a [CategoryScore],
    wiscar: &'a WiscarScores,
}

#[derive(Clone, Copy)]
enum Signal {
    Psychometric,
    Category(TechnicalCategory),
    Dimension(WiscarDimension),
}

impl Signals<'_> {
    fn get(&self, signal: Signal) -> u8 {
        match signal {
            Signal::Psychometric => self.psychometric,
            Signal::Category(category) => self
                .technical
                .iter()
                .find(|c| c.category == category)
                .map_or(0, |c| c.score),
            Signal::Dimension(dimension) => self.wiscar.get(dimension),
        }
    }
}

struct CareerPath {
    title: &'static str,
    description: &'static str,
    weights: &'static [(Signal, f64)],
}

const CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        title: "Legal UX Designer",
        description: "Design user-friendly interfaces for legal software platforms",
        weights: &[
            (Signal::Category(TechnicalCategory::UxFundamentals), 0.3),
            (Signal::Category(TechnicalCategory::Practical), 0.2),
            (Signal::Dimension(WiscarDimension::Skill), 0.2),
            (Signal::Dimension(WiscarDimension::Interest), 0.15),
            (Signal::Dimension(WiscarDimension::RealWorld), 0.15),
        ],
    },
    CareerPath {
        title: "Compliance UX Analyst",
        description: "Ensure UX designs meet legal industry regulations",
        weights: &[
            (Signal::Category(TechnicalCategory::LegalKnowledge), 0.35),
            (Signal::Dimension(WiscarDimension::Cognitive), 0.25),
            (Signal::Category(TechnicalCategory::Analytical), 0.2),
            (Signal::Dimension(WiscarDimension::Will), 0.2),
        ],
    },
    CareerPath {
        title: "Legal Product Manager",
        description: "Lead product development for legal technology solutions",
        weights: &[
            (Signal::Psychometric, 0.3),
            (Signal::Category(TechnicalCategory::Analytical), 0.25),
            (Signal::Dimension(WiscarDimension::RealWorld), 0.25),
            (Signal::Dimension(WiscarDimension::Ability), 0.2),
        ],
    },
];

/// Career paths ordered by match, best first; ties keep declaration order.
fn rank_career_paths(signals: &Signals<'_>) -> Vec<CareerPathMatch> {
    let mut matches: Vec<CareerPathMatch> = CAREER_PATHS
        .iter()
        .map(|path| {
            let total: f64 = path.weights.iter().map(|(_, w)| w).sum();
            let weighted: f64 = path
                .weights
                .iter()
                .map(|(signal, w)| w * f64::from(signals.get(*signal)))
                .sum();
            CareerPathMatch {
                title: path.title.to_string(),
                match_percent: to_percent(weighted / total / 100.0),
                description: path.description.to_string(),
            }
        })
        .collect();
    matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    matches
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
