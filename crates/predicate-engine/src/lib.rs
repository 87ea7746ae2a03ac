//! # predicate-engine
//!
//! Runs a batch end to end. Documents are analyzed in parallel (OCR quality,
//! section detection, identifier extraction), then the batch is aggregated
//! and every cited identifier is scored, flagged, and reclassified.

pub mod engine;
pub mod input;
pub mod tracing_setup;

pub use engine::PredicateEngine;
pub use input::{BatchInput, PriorLabels};
pub use tracing_setup::init_tracing;
