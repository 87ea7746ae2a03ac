//! # predicate-scoring
//!
//! Five additive factors, each a lookup into the configured `ScoringPolicy`:
//! section context, citation frequency, product code match, recency, and
//! regulatory history. Pure: identical inputs always give identical scores.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod inputs;

pub use engine::ConfidenceScorer;
pub use formula::{compute, label_for};
pub use inputs::{HistoryStatus, ProductCodeMatch, ScoringInputs};
