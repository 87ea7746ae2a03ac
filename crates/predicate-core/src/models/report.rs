use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    CitationRecord, ClassificationDecision, ConfidenceScore, IdentifierOccurrence, LookupStatus,
    OcrQualityReport, RiskFlag, SectionSpan, SectionType,
};
use crate::errors::PredicateResult;

/// Per-document output of the analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_id: String,
    /// blake3 hex digest of the text; empty when the text was unusable.
    pub content_hash: String,
    /// Text was null or undecodable; the analysis is a degraded placeholder.
    pub malformed: bool,
    pub quality: OcrQualityReport,
    pub sections: Vec<SectionSpan>,
    pub occurrences: Vec<IdentifierOccurrence>,
}

impl DocumentAnalysis {
    pub fn tier2_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.tier == super::DetectionTier::OcrCorrected)
            .count()
    }
}

/// Per-identifier output across the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierReport {
    pub identifier: String,
    pub citation: CitationRecord,
    pub lookup_status: LookupStatus,
    /// One score per citing document, ordered by document id.
    pub scores: Vec<ConfidenceScore>,
    pub flags: Vec<RiskFlag>,
    /// One decision per citing document, ordered by document id.
    pub decisions: Vec<ClassificationDecision>,
}

impl IdentifierReport {
    pub fn has_prominent_flag(&self) -> bool {
        self.flags.iter().any(RiskFlag::is_prominent)
    }
}

/// Complete result of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Reference date used for recency and age computations.
    pub as_of: NaiveDate,
    pub engine_version: String,
    /// Section families whose patterns failed to compile.
    pub failed_section_patterns: Vec<SectionType>,
    /// In batch input order.
    pub documents: Vec<DocumentAnalysis>,
    /// Ordered by identifier.
    pub identifiers: Vec<IdentifierReport>,
}

impl BatchReport {
    pub fn to_json(&self) -> PredicateResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> PredicateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn identifier(&self, identifier: &str) -> Option<&IdentifierReport> {
        self.identifiers.iter().find(|r| r.identifier == identifier)
    }

    pub fn document(&self, document_id: &str) -> Option<&DocumentAnalysis> {
        self.documents.iter().find(|d| d.document_id == document_id)
    }
}
