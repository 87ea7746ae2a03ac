use serde::{Deserialize, Serialize};

use super::SectionType;

/// Where an identifier occurrence was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum OccurrenceContext {
    /// Inside a detected section of this type.
    Section(SectionType),
    /// Body text outside any detected section.
    General,
    /// Produced by the upstream table/figure extraction pass.
    TableOcr,
}

impl OccurrenceContext {
    pub fn is_substantial_equivalence(self) -> bool {
        matches!(self, Self::Section(t) if t.is_substantial_equivalence())
    }

    pub fn is_testing_or_clinical(self) -> bool {
        matches!(self, Self::Section(t) if t.is_testing_or_clinical())
    }
}

/// One match of an identifier pattern in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierOccurrence {
    /// Normalized upper-case identifier.
    pub identifier: String,
    /// Byte offset of the match start.
    pub start: usize,
    pub end: usize,
    /// Enclosing section, if any. Retained even for table occurrences.
    pub section: Option<SectionType>,
    pub context: OccurrenceContext,
}

/// Section-aware evidence for one identifier within one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEvidence {
    pub in_substantial_equivalence: bool,
    pub in_testing_or_clinical: bool,
    pub in_table_ocr: bool,
    /// Found in body text outside any section, or in a section that is
    /// neither SE nor testing/clinical.
    pub in_general: bool,
}

impl ContextEvidence {
    pub fn from_contexts<I: IntoIterator<Item = OccurrenceContext>>(contexts: I) -> Self {
        let mut evidence = Self::default();
        for context in contexts {
            evidence.record(context);
        }
        evidence
    }

    pub fn record(&mut self, context: OccurrenceContext) {
        match context {
            OccurrenceContext::Section(t) if t.is_substantial_equivalence() => {
                self.in_substantial_equivalence = true
            }
            OccurrenceContext::Section(t) if t.is_testing_or_clinical() => {
                self.in_testing_or_clinical = true
            }
            OccurrenceContext::Section(_) | OccurrenceContext::General => self.in_general = true,
            OccurrenceContext::TableOcr => self.in_table_ocr = true,
        }
    }

    /// Union of two evidence sets for the same identifier.
    pub fn merge(&mut self, other: &ContextEvidence) {
        self.in_substantial_equivalence |= other.in_substantial_equivalence;
        self.in_testing_or_clinical |= other.in_testing_or_clinical;
        self.in_table_ocr |= other.in_table_ocr;
        self.in_general |= other.in_general;
    }

    /// Found anywhere other than an SE section.
    pub fn found_elsewhere(&self) -> bool {
        self.in_testing_or_clinical || self.in_table_ocr || self.in_general
    }

    pub fn is_empty(&self) -> bool {
        !self.in_substantial_equivalence && !self.found_elsewhere()
    }
}
