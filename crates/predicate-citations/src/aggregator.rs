//! Batch-wide citation aggregation.
//!
//! This is the fan-in point of a batch: it needs every document's
//! occurrences before a citation count means anything.

use std::collections::BTreeMap;

use predicate_core::constants::{GENERAL_CITATION_WEIGHT, SE_CITATION_WEIGHT};
use predicate_core::models::{
    CitationRecord, ContextEvidence, DocumentAnalysis, IdentifierOccurrence,
};

/// Per-identifier context evidence for one document.
pub fn collect_evidence(occurrences: &[IdentifierOccurrence]) -> BTreeMap<String, ContextEvidence> {
    let mut evidence: BTreeMap<String, ContextEvidence> = BTreeMap::new();
    for occurrence in occurrences {
        evidence
            .entry(occurrence.identifier.clone())
            .or_default()
            .record(occurrence.context);
    }
    evidence
}

/// Groups occurrences by identifier into citation records.
#[derive(Debug, Default)]
pub struct CitationAggregator {
    records: BTreeMap<String, CitationRecord>,
}

impl CitationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document. Adding the same document twice does not change counts.
    pub fn add_document(&mut self, document_id: &str, occurrences: &[IdentifierOccurrence]) {
        for (identifier, evidence) in collect_evidence(occurrences) {
            let weight = if evidence.in_substantial_equivalence {
                SE_CITATION_WEIGHT
            } else {
                GENERAL_CITATION_WEIGHT
            };
            let record = self
                .records
                .entry(identifier.clone())
                .or_insert_with(|| CitationRecord::new(identifier));
            let slot = record.weights.entry(document_id.to_string()).or_insert(weight);
            *slot = slot.max(weight);
        }
    }

    pub fn finish(self) -> BTreeMap<String, CitationRecord> {
        tracing::debug!(identifiers = self.records.len(), "citation aggregation complete");
        self.records
    }

    /// Aggregate a completed batch.
    pub fn aggregate(analyses: &[DocumentAnalysis]) -> BTreeMap<String, CitationRecord> {
        let mut aggregator = Self::new();
        for analysis in analyses {
            aggregator.add_document(&analysis.document_id, &analysis.occurrences);
        }
        aggregator.finish()
    }
}
