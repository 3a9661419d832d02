//! The built-in Legal UX question bank.
//!
//! Choice options carry a `fit` weight (`0..=MAX_FIT`) saying how strongly the
//! option matches the Legal UX target profile; technical options carry a
//! `correct` flag instead. These weights are the scoring rubric's input table.

use std::sync::{Arc, LazyLock};

use thiserror::Error;

use crate::model::{
    ChoiceOption, PsychometricCategory, Question, QuestionError, QuestionSet, QuestionTag,
    ScaleBounds, SectionId, TechnicalCategory, WiscarDimension,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question set for {found} supplied where {expected} was expected")]
    WrongSection {
        expected: SectionId,
        found: SectionId,
    },
}

/// The three question sets an assessment walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    psychometric: Arc<QuestionSet>,
    technical: Arc<QuestionSet>,
    wiscar: Arc<QuestionSet>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    psychometric: Arc::new(build(SectionId::Psychometric, psychometric_questions)),
    technical: Arc::new(build(SectionId::Technical, technical_questions)),
    wiscar: Arc::new(build(SectionId::Wiscar, wiscar_questions)),
});

impl Catalog {
    /// The built-in Legal UX question bank.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Assemble a catalog from custom question sets.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::WrongSection` if a set is passed in the wrong slot.
    pub fn try_new(
        psychometric: QuestionSet,
        technical: QuestionSet,
        wiscar: QuestionSet,
    ) -> Result<Self, CatalogError> {
        for (expected, set) in [
            (SectionId::Psychometric, &psychometric),
            (SectionId::Technical, &technical),
            (SectionId::Wiscar, &wiscar),
        ] {
            if set.section() != expected {
                return Err(CatalogError::WrongSection {
                    expected,
                    found: set.section(),
                });
            }
        }
        Ok(Self {
            psychometric: Arc::new(psychometric),
            technical: Arc::new(technical),
            wiscar: Arc::new(wiscar),
        })
    }

    #[must_use]
    pub fn section(&self, section: SectionId) -> &Arc<QuestionSet> {
        match section {
            SectionId::Psychometric => &self.psychometric,
            SectionId::Technical => &self.technical,
            SectionId::Wiscar => &self.wiscar,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// # Panics
///
/// Panics if the built-in data is malformed; covered by the tests below.
fn build(section: SectionId, questions: fn() -> Result<Vec<Question>, QuestionError>) -> QuestionSet {
    questions()
        .and_then(|questions| QuestionSet::new(section, questions))
        .expect("built-in question data should be valid")
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn options(items: [(&str, u8); 4]) -> Vec<ChoiceOption> {
    (1_u8..)
        .zip(items)
        .map(|(id, (label, fit))| ChoiceOption::new(id, label).with_fit(fit))
        .collect()
}

fn quiz_options(items: [&str; 4], correct: u8) -> Vec<ChoiceOption> {
    (1_u8..)
        .zip(items)
        .map(|(id, label)| {
            let option = ChoiceOption::new(id, label);
            if id == correct { option.correct() } else { option }
        })
        .collect()
}

//
// ─── PSYCHOMETRIC ──────────────────────────────────────────────────────────────
//

fn psychometric_questions() -> Result<Vec<Question>, QuestionError> {
    use PsychometricCategory::{Cognitive, Interests, Motivation, Personality};
    let tag = QuestionTag::Psychometric;

    Ok(vec![
        Question::choice(
            "p1",
            tag(Personality),
            "When working on complex legal documents, I prefer to:",
            options([
                ("Work methodically through each section in order", 2),
                ("Get an overview first, then dive into details", 3),
                ("Focus on the most critical parts first", 2),
                ("Collaborate with others to understand different perspectives", 1),
            ]),
        )?,
        Question::choice(
            "p2",
            tag(Personality),
            "In a team meeting discussing UX improvements for legal software, I typically:",
            options([
                ("Listen carefully and contribute thoughtful insights", 2),
                ("Take the lead in driving the discussion forward", 1),
                ("Ask clarifying questions to ensure understanding", 3),
                ("Focus on practical implementation challenges", 1),
            ]),
        )?,
        Question::choice(
            "m1",
            tag(Motivation),
            "What motivates me most about improving user experiences in legal technology:",
            options([
                ("Making complex legal processes more accessible to everyone", 3),
                ("Solving challenging technical and regulatory constraints", 1),
                ("Building innovative solutions that transform the industry", 1),
                ("Helping legal professionals work more efficiently", 2),
            ]),
        )?,
        Question::choice(
            "i1",
            tag(Interests),
            "Which aspect of legal UX work sounds most engaging to you:",
            options([
                ("Conducting user research with legal professionals", 3),
                ("Designing intuitive interfaces for complex legal workflows", 2),
                ("Ensuring compliance while maintaining usability", 1),
                ("Analyzing user behavior and improving experiences", 2),
            ]),
        )?,
        Question::choice(
            "c1",
            tag(Cognitive),
            "When faced with conflicting requirements (user needs vs. legal compliance), I would:",
            options([
                ("Research similar cases and best practices", 2),
                ("Consult with legal experts and stakeholders", 2),
                ("Prototype multiple solutions and test them", 3),
                ("Analyze the trade-offs systematically", 2),
            ]),
        )?,
        Question::choice(
            "p3",
            tag(Personality),
            "My approach to learning new legal regulations and compliance requirements is:",
            options([
                ("Study them thoroughly before applying them", 1),
                ("Learn by working on real projects with guidance", 3),
                ("Break them down into smaller, manageable parts", 2),
                ("Discuss them with experts to gain insights", 2),
            ]),
        )?,
    ])
}

//
// ─── TECHNICAL ─────────────────────────────────────────────────────────────────
//

fn technical_questions() -> Result<Vec<Question>, QuestionError> {
    use TechnicalCategory::{Analytical, LegalKnowledge, Practical, UxFundamentals};
    let tag = QuestionTag::Technical;

    Ok(vec![
        Question::choice(
            "t1",
            tag(UxFundamentals),
            "What is the primary goal of user experience design?",
            quiz_options(
                [
                    "Making interfaces look visually appealing",
                    "Creating useful, usable, and delightful experiences",
                    "Implementing the latest design trends",
                    "Reducing development time and costs",
                ],
                2,
            ),
        )?
        .with_explanation(
            "UX design focuses on creating experiences that are useful (meet user needs), \
             usable (easy to use), and delightful (engaging and satisfying).",
        ),
        Question::choice(
            "t2",
            tag(LegalKnowledge),
            "In legal technology, what does 'compliance' primarily refer to?",
            quiz_options(
                [
                    "Following software development best practices",
                    "Meeting accessibility standards",
                    "Adhering to legal and regulatory requirements",
                    "Maintaining data backup procedures",
                ],
                3,
            ),
        )?
        .with_explanation(
            "Compliance in legal tech means ensuring systems meet legal and regulatory \
             requirements like GDPR, HIPAA, or industry-specific regulations.",
        ),
        Question::choice(
            "t3",
            tag(Analytical),
            "A law firm reports that their document management system is 'difficult to use.' \
             What should be your first step as a Legal UX specialist?",
            quiz_options(
                [
                    "Immediately redesign the interface",
                    "Conduct user research to understand specific pain points",
                    "Review competitor solutions",
                    "Upgrade to the latest technology",
                ],
                2,
            ),
        )?
        .with_explanation(
            "User research helps identify specific problems and user needs before proposing solutions.",
        ),
        Question::choice(
            "t4",
            tag(Practical),
            "When designing a legal contract review interface, which element is most critical \
             for user efficiency?",
            quiz_options(
                [
                    "Colorful visual design",
                    "Clear navigation and document structure highlighting",
                    "Advanced animation effects",
                    "Multiple font options",
                ],
                2,
            ),
        )?
        .with_explanation(
            "Legal professionals need clear, structured interfaces that help them quickly \
             navigate and understand complex documents.",
        ),
        Question::choice(
            "t5",
            tag(UxFundamentals),
            "What is a user persona in UX design?",
            quiz_options(
                [
                    "A fictional character representing a user segment",
                    "A database of user preferences",
                    "A design template",
                    "A user interface component",
                ],
                1,
            ),
        )?
        .with_explanation(
            "User personas are fictional characters based on research that represent different \
             user types and help guide design decisions.",
        ),
        Question::choice(
            "t6",
            tag(LegalKnowledge),
            "What is attorney-client privilege?",
            quiz_options(
                [
                    "A lawyer's right to charge premium fees",
                    "Protection of confidential communications between attorney and client",
                    "A client's right to change lawyers",
                    "Special access to legal databases",
                ],
                2,
            ),
        )?
        .with_explanation(
            "Attorney-client privilege protects confidential communications, which is crucial \
             when designing legal technology systems.",
        ),
    ])
}

//
// ─── WISCAR ────────────────────────────────────────────────────────────────────
//

fn wiscar_questions() -> Result<Vec<Question>, QuestionError> {
    use WiscarDimension::{Ability, Cognitive, Interest, RealWorld, Skill, Will};
    let tag = QuestionTag::Wiscar;

    Ok(vec![
        Question::scale(
            "w1",
            tag(Will),
            "I am willing to invest significant time learning about legal industry regulations \
             and requirements.",
            ScaleBounds::try_new(
                1,
                5,
                labels(&["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]),
            )?,
        ),
        Question::choice(
            "w2",
            tag(Will),
            "A complex legal UX project will require 6 months of intensive work with potential \
             setbacks. Your approach would be:",
            options([
                ("Commit fully and persist through challenges", 3),
                ("Start enthusiastically but might lose motivation if obstacles arise", 1),
                ("Prefer projects with clearer, shorter timelines", 0),
                ("Need regular milestones and recognition to stay motivated", 1),
            ]),
        )?,
        Question::scale(
            "i1",
            tag(Interest),
            "I find legal processes and workflows genuinely fascinating to study.",
            ScaleBounds::try_new(
                1,
                5,
                labels(&["Not at all", "Slightly", "Moderately", "Very", "Extremely"]),
            )?,
        ),
        Question::choice(
            "i2",
            tag(Interest),
            "In your free time, you would most likely:",
            options([
                ("Read about legal technology innovations and case studies", 3),
                ("Explore general UX design trends and methodologies", 2),
                ("Focus on unrelated hobbies and activities", 0),
                ("Learn about other professional domains", 1),
            ]),
        )?,
        Question::scale(
            "s1",
            tag(Skill),
            "Rate your current proficiency in UX design principles and methodologies:",
            ScaleBounds::try_new(
                1,
                10,
                labels(&["Beginner", "Intermediate", "Advanced", "Expert"]),
            )?,
        ),
        Question::scale(
            "s2",
            tag(Skill),
            "Rate your understanding of legal industry workflows and terminology:",
            ScaleBounds::try_new(1, 10, labels(&["No knowledge", "Basic", "Good", "Expert"]))?,
        ),
        Question::choice(
            "c1",
            tag(Cognitive),
            "When analyzing a complex user workflow problem, you typically:",
            options([
                ("Break it down systematically into smaller components", 3),
                ("Look for patterns and analogies from similar situations", 2),
                ("Seek input from multiple perspectives before analyzing", 2),
                ("Focus on the most critical pain points first", 1),
            ]),
        )?,
        Question::scale(
            "a1",
            tag(Ability),
            "I actively seek feedback and adjust my approach based on new information.",
            ScaleBounds::try_new(
                1,
                5,
                labels(&["Never", "Rarely", "Sometimes", "Often", "Always"]),
            )?,
        ),
        Question::choice(
            "r1",
            tag(RealWorld),
            "The most appealing aspect of working as a Legal UX Specialist would be:",
            options([
                ("Making legal services more accessible to ordinary people", 3),
                ("Working with cutting-edge technology in a traditional industry", 2),
                ("Collaborating with legal professionals to solve complex problems", 3),
                ("Building expertise in a specialized, high-demand field", 1),
            ]),
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerModality, MAX_FIT};

    #[test]
    fn standard_catalog_builds_every_section() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.section(SectionId::Psychometric).len(), 6);
        assert_eq!(catalog.section(SectionId::Technical).len(), 6);
        assert_eq!(catalog.section(SectionId::Wiscar).len(), 9);
        for section in SectionId::ALL {
            assert_eq!(catalog.section(section).section(), section);
        }
    }

    #[test]
    fn technical_questions_have_exactly_one_correct_option() {
        let catalog = Catalog::standard();
        for question in catalog.section(SectionId::Technical).iter() {
            let correct = question.options().iter().filter(|o| o.correct).count();
            assert_eq!(correct, 1, "question {} has {correct} correct options", question.id());
            assert!(question.explanation().is_some());
        }
        assert_eq!(catalog.section(SectionId::Technical).tags().len(), 4);
    }

    #[test]
    fn every_profile_choice_can_reach_full_fit() {
        let catalog = Catalog::standard();
        for section in [SectionId::Psychometric, SectionId::Wiscar] {
            for question in catalog.section(section).iter() {
                if let AnswerModality::Choice { options } = question.modality() {
                    assert!(
                        options.iter().any(|o| o.fit == MAX_FIT),
                        "question {} has no full-fit option",
                        question.id()
                    );
                }
            }
        }
    }

    #[test]
    fn wiscar_covers_all_six_dimensions() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.section(SectionId::Wiscar).tags(),
            QuestionTag::all_for(SectionId::Wiscar)
        );
    }

    #[test]
    fn try_new_rejects_sets_in_wrong_slot() {
        let standard = Catalog::standard();
        let err = Catalog::try_new(
            (**standard.section(SectionId::Technical)).clone(),
            (**standard.section(SectionId::Technical)).clone(),
            (**standard.section(SectionId::Wiscar)).clone(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::WrongSection {
                expected: SectionId::Psychometric,
                found: SectionId::Technical
            }
        );
    }
}
