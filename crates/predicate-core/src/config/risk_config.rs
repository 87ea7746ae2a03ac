use serde::{Deserialize, Serialize};

use super::defaults;

/// Risk flag thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Decisions older than this many years raise OLD.
    pub old_device_years: u32,
    /// Adverse event count at or above which HIGH_MAUDE is raised.
    pub high_maude_events: u64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            old_device_years: defaults::DEFAULT_OLD_DEVICE_YEARS,
            high_maude_events: defaults::DEFAULT_HIGH_MAUDE_EVENTS,
        }
    }
}
