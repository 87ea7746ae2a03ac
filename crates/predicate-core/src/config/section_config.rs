use serde::{Deserialize, Serialize};

use super::defaults;

/// Section detection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Maximum content window (characters past the heading) of a
    /// substantial-equivalence span.
    pub se_window_chars: usize,
    /// Longest trimmed line still considered a heading.
    pub max_heading_chars: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            se_window_chars: defaults::DEFAULT_SE_WINDOW_CHARS,
            max_heading_chars: defaults::DEFAULT_MAX_HEADING_CHARS,
        }
    }
}
