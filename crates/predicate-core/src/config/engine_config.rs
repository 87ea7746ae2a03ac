use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch execution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Worker threads for per-document analysis. 0 = one per core.
    pub workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: defaults::DEFAULT_WORKERS,
        }
    }
}
