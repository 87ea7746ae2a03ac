//! # predicate-core
//!
//! Foundation crate for the predicate citation engine.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PredicateConfig;
pub use errors::{PredicateError, PredicateResult};
pub use models::{
    ClassificationDecision, ConfidenceScore, DocumentText, IdentifierOccurrence,
    OccurrenceContext, OcrQualityLevel, OcrQualityReport, RiskFlag, SectionSpan, SectionType,
};
