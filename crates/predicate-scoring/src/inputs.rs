use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use predicate_core::config::ScoringConfig;
use predicate_core::models::{ContextEvidence, RegulatoryHistory};

/// Whether the cited and citing devices share a product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCodeMatch {
    Matched,
    Unknown,
    Mismatched,
}

impl ProductCodeMatch {
    /// Compare two optional product codes. Either side unknown is `Unknown`.
    pub fn compare(citing: Option<&str>, cited: Option<&str>) -> Self {
        match (citing.map(str::trim), cited.map(str::trim)) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
                if a.eq_ignore_ascii_case(b) {
                    Self::Matched
                } else {
                    Self::Mismatched
                }
            }
            _ => Self::Unknown,
        }
    }
}

/// Regulatory standing of the cited device as it bears on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    /// Record present, no recall or adverse findings.
    Clean,
    /// Cleared under a conditional decision code.
    Conditional,
    /// Any recall, death event, withdrawal, or enforcement action.
    Adverse,
    /// No record available.
    Unknown,
}

impl HistoryStatus {
    pub fn from_record(record: Option<&RegulatoryHistory>, config: &ScoringConfig) -> Self {
        let Some(record) = record else {
            return Self::Unknown;
        };
        let recalled = record.recall_count.is_some_and(|n| n > 0) || !record.recall_classes.is_empty();
        let deaths = record.adverse_event_death_count.is_some_and(|n| n > 0);
        let withdrawn = record.withdrawn.unwrap_or(false);
        let enforced = record.enforcement_action_count.is_some_and(|n| n > 0);
        if recalled || deaths || withdrawn || enforced {
            Self::Adverse
        } else if record
            .decision_code
            .as_deref()
            .is_some_and(|code| config.is_conditional_code(code))
        {
            Self::Conditional
        } else {
            Self::Clean
        }
    }
}

/// Everything the scorer looks at for one (identifier, citing document) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringInputs {
    pub evidence: ContextEvidence,
    /// Batch-wide weighted citation sum for the identifier.
    pub weighted_citations: f64,
    pub product_code: ProductCodeMatch,
    pub decision_date: Option<NaiveDate>,
    /// Reference date for recency.
    pub as_of: NaiveDate,
    pub history: HistoryStatus,
}
