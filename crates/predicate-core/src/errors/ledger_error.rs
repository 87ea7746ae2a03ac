use uuid::Uuid;

/// Decision ledger errors. The ledger is append-only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("run {run_id} is already recorded")]
    DuplicateRun { run_id: Uuid },

    #[error("decision for {identifier} belongs to run {found}, expected {expected}")]
    RunMismatch {
        identifier: String,
        expected: Uuid,
        found: Uuid,
    },
}
