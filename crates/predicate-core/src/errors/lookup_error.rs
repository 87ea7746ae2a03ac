/// Errors returned by the external regulatory-history collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("regulatory history unavailable for {identifier}: {reason}")]
    Unavailable { identifier: String, reason: String },
}
