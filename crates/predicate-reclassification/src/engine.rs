//! ReclassificationEngine: one decision per (identifier, citing document).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use predicate_core::models::{
    ClassificationDecision, ContextEvidence, DecisionBasis, FinalClassification,
    PriorClassification,
};

use crate::rules;

/// Stamps every decision of one run with the same run id and timestamp.
#[derive(Debug, Clone)]
pub struct ReclassificationEngine {
    run_id: Uuid,
    decided_at: DateTime<Utc>,
}

impl Default for ReclassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReclassificationEngine {
    /// Engine for a fresh run.
    pub fn new() -> Self {
        Self::for_run(Uuid::new_v4(), Utc::now())
    }

    pub fn for_run(run_id: Uuid, decided_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            decided_at,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }

    /// Classify from evidence gathered in one citing document.
    pub fn decide(
        &self,
        identifier: &str,
        document_id: &str,
        prior: PriorClassification,
        evidence: &ContextEvidence,
    ) -> ClassificationDecision {
        let in_se = evidence.in_substantial_equivalence;
        let found_elsewhere = evidence.found_elsewhere();
        let (result, basis) = match rules::find_applicable_rule(prior, in_se, found_elsewhere) {
            Some(rule) => (rule.result, rule.basis),
            None => {
                tracing::warn!(identifier, ?prior, in_se, found_elsewhere, "no reclassification rule");
                (FinalClassification::Uncertain, DecisionBasis::NeedsReview)
            }
        };
        if basis == DecisionBasis::ReclassifiedUp {
            tracing::debug!(identifier, document_id, "reference reclassified as predicate");
        }
        ClassificationDecision {
            run_id: self.run_id,
            decided_at: self.decided_at,
            identifier: identifier.to_string(),
            document_id: document_id.to_string(),
            prior,
            found_in_se: in_se,
            found_in_general: found_elsewhere,
            result,
            basis,
        }
    }
}
