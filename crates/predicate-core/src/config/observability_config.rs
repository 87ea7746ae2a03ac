use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `PREDICATE_LOG` is unset.
    pub log_filter: String,
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
