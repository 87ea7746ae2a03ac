use std::collections::{HashMap, HashSet};

use crate::errors::LookupError;
use crate::models::RegulatoryHistory;

/// External collaborator supplying regulatory history for cited identifiers.
///
/// `Ok(None)` means the collaborator answered and has no record;
/// `Err(Unavailable)` means it could not answer. The engine degrades both to
/// "unknown" but reports them differently.
pub trait RegulatoryLookup: Send + Sync {
    fn lookup(&self, identifier: &str) -> Result<Option<RegulatoryHistory>, LookupError>;
}

/// In-memory lookup keyed by upper-case identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    records: HashMap<String, RegulatoryHistory>,
    unavailable: HashSet<String>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = RegulatoryHistory>>(records: I) -> Self {
        let mut lookup = Self::new();
        for record in records {
            lookup.insert(record);
        }
        lookup
    }

    pub fn insert(&mut self, record: RegulatoryHistory) {
        self.records
            .insert(record.identifier.to_ascii_uppercase(), record);
    }

    pub fn with_record(mut self, record: RegulatoryHistory) -> Self {
        self.insert(record);
        self
    }

    /// Simulate an outage for one identifier.
    pub fn with_unavailable(mut self, identifier: &str) -> Self {
        self.unavailable.insert(identifier.to_ascii_uppercase());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RegulatoryLookup for InMemoryLookup {
    fn lookup(&self, identifier: &str) -> Result<Option<RegulatoryHistory>, LookupError> {
        let key = identifier.to_ascii_uppercase();
        if self.unavailable.contains(&key) {
            return Err(LookupError::Unavailable {
                identifier: key,
                reason: "lookup source offline".to_string(),
            });
        }
        Ok(self.records.get(&key).cloned())
    }
}
