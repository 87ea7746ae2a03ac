use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Naive classification supplied by the caller before section analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorClassification {
    Predicate,
    Reference,
    /// No prior label: any evidence is a new finding.
    #[default]
    Unknown,
}

/// Reconciled classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalClassification {
    Predicate,
    Reference,
    Uncertain,
}

/// How the final classification relates to the prior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBasis {
    Confirmed,
    ReclassifiedUp,
    NewFinding,
    NeedsReview,
    NoEvidence,
}

/// Immutable reconciliation result for one identifier in one citing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDecision {
    pub run_id: Uuid,
    pub decided_at: DateTime<Utc>,
    pub identifier: String,
    pub document_id: String,
    pub prior: PriorClassification,
    pub found_in_se: bool,
    /// Found outside SE sections (general text, other sections, tables).
    pub found_in_general: bool,
    pub result: FinalClassification,
    pub basis: DecisionBasis,
}
