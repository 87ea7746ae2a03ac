//! PredicateEngine: the batch pipeline.
//!
//! Per-document work (quality → sections → occurrences) fans out on a rayon
//! pool. Citation aggregation is the fan-in barrier; scoring, flags, and
//! reclassification run per identifier after it.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use rayon::prelude::*;

use predicate_citations::{collect_evidence, extract_identifiers, map_occurrences, CitationAggregator};
use predicate_core::config::PredicateConfig;
use predicate_core::constants::VERSION;
use predicate_core::errors::ConfigError;
use predicate_core::models::{
    BatchReport, CitationRecord, ClassificationDecision, ContextEvidence, DocumentAnalysis,
    DocumentText, IdentifierReport, LookupStatus, OcrQualityReport, RegulatoryHistory,
};
use predicate_core::traits::RegulatoryLookup;
use predicate_ocr::OcrQualityEstimator;
use predicate_reclassification::ReclassificationEngine;
use predicate_risk::RiskFlagEngine;
use predicate_scoring::{ConfidenceScorer, HistoryStatus, ProductCodeMatch, ScoringInputs};
use predicate_sections::{pattern_health, SectionDetector};

use crate::input::BatchInput;
use crate::{batch_span, document_span, scoring_span};

/// Per-document evidence keyed by identifier.
type EvidenceMap = BTreeMap<String, ContextEvidence>;

/// The full pipeline over one immutable configuration.
pub struct PredicateEngine {
    config: PredicateConfig,
    estimator: OcrQualityEstimator,
    detector: SectionDetector,
    scorer: ConfidenceScorer,
    flags: RiskFlagEngine,
}

impl Default for PredicateEngine {
    fn default() -> Self {
        Self::build(PredicateConfig::default())
    }
}

impl PredicateEngine {
    /// Engine over a validated configuration.
    pub fn new(config: PredicateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PredicateConfig) -> Self {
        Self {
            estimator: OcrQualityEstimator::new(config.ocr.clone()),
            detector: SectionDetector::from_config(&config),
            scorer: ConfidenceScorer::new(config.scoring.clone()),
            flags: RiskFlagEngine::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &PredicateConfig {
        &self.config
    }

    /// Analyze one document. Unusable text degrades to a LOW, empty analysis.
    pub fn analyze_document(&self, document: &DocumentText) -> DocumentAnalysis {
        let _span = document_span!(document.document_id()).entered();

        let text = match document.usable_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "malformed document input");
                return DocumentAnalysis {
                    document_id: document.document_id().to_string(),
                    content_hash: String::new(),
                    malformed: true,
                    quality: OcrQualityReport::unassessable(0),
                    sections: Vec::new(),
                    occurrences: Vec::new(),
                };
            }
        };

        let quality = self.estimator.estimate_with_hint(text, document.source_hint());
        let sections = self.detector.detect(text, &quality);
        let occurrences = map_occurrences(
            extract_identifiers(text),
            &sections,
            document.table_regions(),
        );

        tracing::debug!(
            quality = %quality.level,
            sections = sections.len(),
            occurrences = occurrences.len(),
            "document analyzed"
        );

        DocumentAnalysis {
            document_id: document.document_id().to_string(),
            content_hash: blake3::hash(text.as_bytes()).to_hex().to_string(),
            malformed: false,
            quality,
            sections,
            occurrences,
        }
    }

    /// Analyze documents in parallel, preserving input order.
    pub fn analyze_batch(&self, documents: &[DocumentText]) -> Vec<DocumentAnalysis> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if self.config.engine.workers > 0 {
            builder = builder.num_threads(self.config.engine.workers);
        }
        match builder.build() {
            Ok(pool) => pool.install(|| {
                documents
                    .par_iter()
                    .map(|document| self.analyze_document(document))
                    .collect()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "worker pool unavailable, analyzing sequentially");
                documents
                    .iter()
                    .map(|document| self.analyze_document(document))
                    .collect()
            }
        }
    }

    /// Run a whole batch under a fresh run id.
    pub fn run(&self, input: &BatchInput, lookup: &dyn RegulatoryLookup) -> BatchReport {
        self.run_with(input, lookup, &ReclassificationEngine::new())
    }

    /// Run a whole batch, stamping decisions from `reclassifier`.
    pub fn run_with(
        &self,
        input: &BatchInput,
        lookup: &dyn RegulatoryLookup,
        reclassifier: &ReclassificationEngine,
    ) -> BatchReport {
        let _span = batch_span!(input.documents.len()).entered();

        let failed_section_patterns = pattern_health();
        let documents = self.analyze_batch(&input.documents);
        let citations = CitationAggregator::aggregate(&documents);

        let reports: Vec<IdentifierReport> = {
            let evidence = evidence_by_document(&documents);
            let product_codes: HashMap<&str, &str> = input
                .documents
                .iter()
                .filter_map(|d| d.product_code().map(|code| (d.document_id(), code)))
                .collect();

            let identifiers: BTreeSet<String> = citations
                .keys()
                .cloned()
                .chain(input.priors.iter().map(|(identifier, _, _)| identifier.to_string()))
                .collect();

            identifiers
                .into_iter()
                .map(|identifier| {
                    let citation = citations
                        .get(&identifier)
                        .cloned()
                        .unwrap_or_else(|| CitationRecord::new(identifier.clone()));
                    self.report_identifier(
                        citation,
                        input,
                        lookup,
                        reclassifier,
                        &evidence,
                        &product_codes,
                    )
                })
                .collect()
        };

        let malformed = documents.iter().filter(|d| d.malformed).count();
        let tier2 = documents.iter().map(DocumentAnalysis::tier2_count).sum::<usize>();
        let flagged = reports.iter().filter(|r| r.has_prominent_flag()).count();
        tracing::info!(
            run_id = %reclassifier.run_id(),
            documents = documents.len(),
            malformed,
            tier2_sections = tier2,
            identifiers = reports.len(),
            prominent_flags = flagged,
            "batch complete"
        );

        BatchReport {
            run_id: reclassifier.run_id(),
            generated_at: reclassifier.decided_at(),
            as_of: input.as_of,
            engine_version: VERSION.to_string(),
            failed_section_patterns,
            documents,
            identifiers: reports,
        }
    }

    fn report_identifier(
        &self,
        citation: CitationRecord,
        input: &BatchInput,
        lookup: &dyn RegulatoryLookup,
        reclassifier: &ReclassificationEngine,
        evidence: &HashMap<&str, EvidenceMap>,
        product_codes: &HashMap<&str, &str>,
    ) -> IdentifierReport {
        let identifier = citation.identifier.clone();
        let _span = scoring_span!(identifier, citation.citation_count()).entered();

        let (lookup_status, record) = resolve(lookup, &identifier);
        let record = record.as_ref();
        let history = HistoryStatus::from_record(record, self.scorer.config());
        let cited_code = record.and_then(|r| r.product_code.as_deref());
        let weighted_citations = citation.weighted_count();

        let mut scores = Vec::with_capacity(citation.citation_count());
        let mut decisions: Vec<ClassificationDecision> = Vec::new();
        for document_id in citation.citing_documents() {
            let found = evidence
                .get(document_id)
                .and_then(|map| map.get(&identifier))
                .copied()
                .unwrap_or_default();
            let inputs = ScoringInputs {
                evidence: found,
                weighted_citations,
                product_code: ProductCodeMatch::compare(
                    product_codes.get(document_id).copied(),
                    cited_code,
                ),
                decision_date: record.and_then(|r| r.decision_date),
                as_of: input.as_of,
                history,
            };
            scores.push(self.scorer.score(&identifier, document_id, &inputs));

            let prior = input.priors.get(&identifier, document_id);
            decisions.push(reclassifier.decide(&identifier, document_id, prior, &found));
        }

        // Labelled pairs with no occurrence in a batch document.
        for (labelled, document_id, prior) in input.priors.iter() {
            if labelled != identifier || citation.weight_for(document_id).is_some() {
                continue;
            }
            if !evidence.contains_key(document_id) {
                tracing::debug!(identifier = %identifier, document_id, "prior label for document outside batch");
                continue;
            }
            decisions.push(reclassifier.decide(
                &identifier,
                document_id,
                prior,
                &ContextEvidence::default(),
            ));
        }
        decisions.sort_by(|a, b| a.document_id.cmp(&b.document_id));

        let citing_codes: Vec<&str> = citation
            .citing_documents()
            .filter_map(|document_id| product_codes.get(document_id).copied())
            .collect();
        let flags = self.flags.evaluate(
            &identifier,
            record,
            &citing_codes,
            &input.exclusions,
            input.as_of,
        );

        IdentifierReport {
            identifier,
            citation,
            lookup_status,
            scores,
            flags,
            decisions,
        }
    }
}

/// Evidence per document id. Documents sharing an id are merged, matching
/// how the aggregator takes the strongest weight per citing document.
fn evidence_by_document(documents: &[DocumentAnalysis]) -> HashMap<&str, EvidenceMap> {
    let mut evidence: HashMap<&str, EvidenceMap> = HashMap::with_capacity(documents.len());
    for document in documents {
        let found = collect_evidence(&document.occurrences);
        match evidence.entry(document.document_id.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(found);
            }
            Entry::Occupied(mut slot) => {
                tracing::warn!(
                    document_id = %document.document_id,
                    "duplicate document id in batch, merging evidence"
                );
                let merged = slot.get_mut();
                for (identifier, more) in found {
                    merged.entry(identifier).or_default().merge(&more);
                }
            }
        }
    }
    evidence
}

/// Query the collaborator. Unavailability degrades to "unknown".
fn resolve(
    lookup: &dyn RegulatoryLookup,
    identifier: &str,
) -> (LookupStatus, Option<RegulatoryHistory>) {
    match lookup.lookup(identifier) {
        Ok(Some(record)) => (LookupStatus::Found, Some(record)),
        Ok(None) => (LookupStatus::NotFound, None),
        Err(e) => {
            tracing::warn!(identifier, error = %e, "regulatory lookup unavailable");
            (LookupStatus::Unavailable, None)
        }
    }
}
