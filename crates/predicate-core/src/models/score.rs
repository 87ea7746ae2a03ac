use std::fmt;

use serde::{Deserialize, Serialize};

/// Label derived from a confidence total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Strong,
    Moderate,
    Weak,
    Poor,
    Reject,
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::Poor => "Poor",
            Self::Reject => "Reject",
        })
    }
}

/// The five factor scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub section_context: u32,
    pub citation_frequency: u32,
    pub product_code_match: u32,
    pub recency: u32,
    pub regulatory_history: u32,
}

impl ScoreComponents {
    pub fn total(&self) -> u32 {
        self.section_context
            + self.citation_frequency
            + self.product_code_match
            + self.recency
            + self.regulatory_history
    }
}

/// Confidence for one (identifier, citing document) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub identifier: String,
    pub document_id: String,
    pub components: ScoreComponents,
    /// Always `components.total()`.
    pub total: u32,
    pub label: ScoreLabel,
}
