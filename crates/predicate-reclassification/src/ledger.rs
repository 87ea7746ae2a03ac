use chrono::{DateTime, Utc};
use uuid::Uuid;

use predicate_core::errors::LedgerError;
use predicate_core::models::ClassificationDecision;

/// All decisions produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRun {
    pub run_id: Uuid,
    pub decided_at: DateTime<Utc>,
    pub decisions: Vec<ClassificationDecision>,
}

/// Append-only history of classification runs. Earlier runs are never rewritten.
#[derive(Debug, Clone, Default)]
pub struct DecisionLedger {
    runs: Vec<LedgerRun>,
}

impl DecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run. Every decision must carry `run_id`, and the run must be new.
    pub fn append(
        &mut self,
        run_id: Uuid,
        decided_at: DateTime<Utc>,
        decisions: Vec<ClassificationDecision>,
    ) -> Result<(), LedgerError> {
        if self.runs.iter().any(|r| r.run_id == run_id) {
            return Err(LedgerError::DuplicateRun { run_id });
        }
        if let Some(stray) = decisions.iter().find(|d| d.run_id != run_id) {
            return Err(LedgerError::RunMismatch {
                identifier: stray.identifier.clone(),
                expected: run_id,
                found: stray.run_id,
            });
        }
        tracing::debug!(%run_id, decisions = decisions.len(), "ledger run appended");
        self.runs.push(LedgerRun {
            run_id,
            decided_at,
            decisions,
        });
        Ok(())
    }

    pub fn runs(&self) -> &[LedgerRun] {
        &self.runs
    }

    pub fn run(&self, run_id: Uuid) -> Option<&LedgerRun> {
        self.runs.iter().find(|r| r.run_id == run_id)
    }

    /// Every decision ever made for `identifier`, oldest run first.
    pub fn history(&self, identifier: &str) -> Vec<&ClassificationDecision> {
        self.runs
            .iter()
            .flat_map(|r| r.decisions.iter())
            .filter(|d| d.identifier == identifier)
            .collect()
    }

    /// Most recent decision for an (identifier, document) pair.
    pub fn latest(&self, identifier: &str, document_id: &str) -> Option<&ClassificationDecision> {
        self.runs
            .iter()
            .rev()
            .flat_map(|r| r.decisions.iter())
            .find(|d| d.identifier == identifier && d.document_id == document_id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
