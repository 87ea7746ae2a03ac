//! Span definitions per stage: document analysis, batch run, identifier scoring.

/// Create a document analysis span.
#[macro_export]
macro_rules! document_span {
    ($document_id:expr) => {
        tracing::info_span!("predicate.document", document_id = %$document_id)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($document_count:expr) => {
        tracing::info_span!("predicate.batch", document_count = $document_count)
    };
}

/// Create an identifier scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($identifier:expr, $citations:expr) => {
        tracing::debug_span!("predicate.scoring", identifier = %$identifier, citations = $citations)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DOCUMENT: &str = "predicate.document";
    pub const BATCH: &str = "predicate.batch";
    pub const SCORING: &str = "predicate.scoring";
}
