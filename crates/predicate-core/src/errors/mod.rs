//! Error handling for the predicate engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! None of these abort a batch: document and lookup problems degrade the
//! affected output and are surfaced in the report.

pub mod config_error;
pub mod input_error;
pub mod ledger_error;
pub mod lookup_error;

pub use config_error::ConfigError;
pub use input_error::InputError;
pub use ledger_error::LedgerError;
pub use lookup_error::LookupError;

/// Top-level error for operations that can genuinely fail
/// (configuration loading, ledger appends, and report serialization).
#[derive(Debug, thiserror::Error)]
pub enum PredicateError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("lookup error: {0}")]
    LookupError(#[from] LookupError),

    #[error("input error: {0}")]
    InputError(#[from] InputError),

    #[error("ledger error: {0}")]
    LedgerError(#[from] LedgerError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type PredicateResult<T> = Result<T, PredicateError>;
