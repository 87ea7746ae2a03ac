use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-maintained exclusion list, passed explicitly into each run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionList {
    entries: BTreeMap<String, String>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers are normalized to upper case.
    pub fn with(mut self, identifier: &str, reason: impl Into<String>) -> Self {
        self.insert(identifier, reason);
        self
    }

    pub fn insert(&mut self, identifier: &str, reason: impl Into<String>) {
        self.entries
            .insert(identifier.trim().to_ascii_uppercase(), reason.into());
    }

    pub fn reason_for(&self, identifier: &str) -> Option<&str> {
        self.entries
            .get(&identifier.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
