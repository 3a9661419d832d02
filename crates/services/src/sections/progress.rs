use readiness_core::model::{QuestionTag, SectionId};

/// Answered vs. total questions for one tag of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagProgress {
    pub tag: QuestionTag,
    pub answered: usize,
    pub total: usize,
}

impl TagProgress {
    /// Share of this tag's questions already answered, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Aggregated view of section progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: SectionId,
    /// Zero-based index of the current question.
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
    /// One entry per tag the section uses, in display order.
    pub tags: Vec<TagProgress>,
}

impl SectionProgress {
    /// One-based position of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// `(index + 1) / total`; a completed section reports 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_ratio(&self) -> f64 {
        if self.is_complete {
            return 1.0;
        }
        if self.total == 0 {
            return 0.0;
        }
        self.position() as f64 / self.total as f64
    }

    #[must_use]
    pub fn tag(&self, tag: QuestionTag) -> Option<&TagProgress> {
        self.tags.iter().find(|p| p.tag == tag)
    }
}
