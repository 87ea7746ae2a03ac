//! # predicate-citations
//!
//! Finds identifier occurrences in full document text, labels each with the
//! section it falls in, and aggregates distinct citing documents per
//! identifier across a batch.

pub mod aggregator;
pub mod extractor;
pub mod mapper;

pub use aggregator::{collect_evidence, CitationAggregator};
pub use extractor::{extract_identifiers, IdentifierMatch};
pub use mapper::{enclosing_section, map_occurrences};
