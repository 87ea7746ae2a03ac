use serde::{Deserialize, Serialize};

use super::defaults;

/// OCR quality estimation and correction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Error rate (per 100 chars) strictly below which text is HIGH quality.
    pub high_quality_max_error_rate: f64,
    /// Error rate (per 100 chars) at or above which text is LOW quality.
    pub low_quality_min_error_rate: f64,
    /// Texts with fewer non-whitespace characters are LOW with confidence 0.0.
    pub min_estimable_chars: usize,
    pub pipe_allowance_chars: usize,
    /// Upper bound on glyph substitutions applied to a single heading line.
    pub max_substitutions_per_line: usize,
    /// A `scanned` source hint caps measured quality at MEDIUM.
    pub trust_scanned_hint: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            high_quality_max_error_rate: defaults::DEFAULT_HIGH_QUALITY_MAX_ERROR_RATE,
            low_quality_min_error_rate: defaults::DEFAULT_LOW_QUALITY_MIN_ERROR_RATE,
            min_estimable_chars: defaults::DEFAULT_MIN_ESTIMABLE_CHARS,
            pipe_allowance_chars: defaults::DEFAULT_PIPE_ALLOWANCE_CHARS,
            max_substitutions_per_line: defaults::DEFAULT_MAX_SUBSTITUTIONS_PER_LINE,
            trust_scanned_hint: defaults::DEFAULT_TRUST_SCANNED_HINT,
        }
    }
}
