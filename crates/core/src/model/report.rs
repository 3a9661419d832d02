use serde::{Deserialize, Serialize};

use crate::model::question::{TechnicalCategory, WiscarDimension};

//
// ─── RECOMMENDATION TIER ──────────────────────────────────────────────────────
//

/// Three ordered outcome bands for the overall score, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Strong fit; go for it.
    Pursue,
    /// Workable fit with some gaps to close first.
    Consider,
    /// Significant development needed before pursuing the role.
    Develop,
}

impl RecommendationTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pursue => "Highly Recommended",
            Self::Consider => "Conditional Fit",
            Self::Develop => "Development Needed",
        }
    }

    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Pursue => {
                "Your profile aligns strongly with the Legal UX Specialist role."
            }
            Self::Consider => {
                "You show a promising fit; closing a few gaps will strengthen your readiness."
            }
            Self::Develop => {
                "Building core skills and domain knowledge first will set you up for this path."
            }
        }
    }
}

//
// ─── SCORE PARTS ──────────────────────────────────────────────────────────────
//

/// Score for one technical category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: TechnicalCategory,
    pub score: u8,
}

/// Scores for the six WISCAR dimensions, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    #[must_use]
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    /// Dimension scores in display order.
    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, u8)> + '_ {
        WiscarDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Arithmetic mean of the six dimensions.
    #[must_use]
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.iter().map(|(_, score)| f64::from(score)).sum();
        sum / 6.0
    }
}

/// A suggested role and how well the candidate matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathMatch {
    pub title: String,
    pub match_percent: u8,
    pub description: String,
}

//
// ─── SCORE REPORT ─────────────────────────────────────────────────────────────
//

/// Derived, read-only outcome of a completed assessment.
///
/// All scores are integers in `[0, 100]`. `overall` is the weighted
/// combination of `psychometric`, `technical` and the WISCAR mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub psychometric: u8,
    pub technical: u8,
    pub technical_categories: Vec<CategoryScore>,
    pub wiscar: WiscarScores,
    pub overall: u8,
    pub tier: RecommendationTier,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<CareerPathMatch>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
