use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Batch-wide citation record for one identifier.
///
/// `weights` maps each distinct citing document to 1.0 (any SE-context
/// occurrence) or 0.5. The citation count is the number of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationRecord {
    pub identifier: String,
    pub weights: BTreeMap<String, f64>,
}

impl CitationRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            weights: BTreeMap::new(),
        }
    }

    pub fn citation_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weighted_count(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn citing_documents(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn weight_for(&self, document_id: &str) -> Option<f64> {
        self.weights.get(document_id).copied()
    }
}
