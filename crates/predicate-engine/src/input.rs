use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use predicate_core::models::{DocumentText, ExclusionList, PriorClassification};

/// Caller-supplied prior labels, keyed by identifier then citing document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorLabels {
    labels: BTreeMap<String, BTreeMap<String, PriorClassification>>,
}

impl PriorLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: &str, document_id: &str, prior: PriorClassification) {
        self.labels
            .entry(identifier.trim().to_ascii_uppercase())
            .or_default()
            .insert(document_id.to_string(), prior);
    }

    pub fn with(mut self, identifier: &str, document_id: &str, prior: PriorClassification) -> Self {
        self.insert(identifier, document_id, prior);
        self
    }

    /// Prior for the pair, `Unknown` if none was given.
    pub fn get(&self, identifier: &str, document_id: &str) -> PriorClassification {
        self.labels
            .get(&identifier.trim().to_ascii_uppercase())
            .and_then(|docs| docs.get(document_id))
            .copied()
            .unwrap_or_default()
    }

    /// Every labelled (identifier, document, prior).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, PriorClassification)> {
        self.labels.iter().flat_map(|(identifier, docs)| {
            docs.iter()
                .map(move |(doc, prior)| (identifier.as_str(), doc.as_str(), *prior))
        })
    }

    pub fn len(&self) -> usize {
        self.labels.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One batch: documents plus the per-run inputs that must never be ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInput {
    pub documents: Vec<DocumentText>,
    #[serde(default)]
    pub priors: PriorLabels,
    #[serde(default)]
    pub exclusions: ExclusionList,
    /// Reference date for recency and age.
    pub as_of: NaiveDate,
}

impl BatchInput {
    pub fn new(documents: Vec<DocumentText>, as_of: NaiveDate) -> Self {
        Self {
            documents,
            priors: PriorLabels::new(),
            exclusions: ExclusionList::new(),
            as_of,
        }
    }

    pub fn with_priors(mut self, priors: PriorLabels) -> Self {
        self.priors = priors;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionList) -> Self {
        self.exclusions = exclusions;
        self
    }
}
