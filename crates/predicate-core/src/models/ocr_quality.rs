use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse OCR quality classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OcrQualityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for OcrQualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        })
    }
}

/// Raw indicator counts behind an error rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorIndicatorCounts {
    /// Look-alike digits/symbols inside alphabetic words.
    pub substitutions: usize,
    /// `|` glyphs beyond the tolerated allowance.
    pub misread_glyphs: usize,
    /// Word pairs that re-join into a known heading keyword.
    pub split_words: usize,
}

impl ErrorIndicatorCounts {
    pub fn total(&self) -> usize {
        self.substitutions + self.misread_glyphs + self.split_words
    }
}

/// Per-document OCR quality estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrQualityReport {
    pub level: OcrQualityLevel,
    /// In `[0.0, 1.0]`; HIGH ≥ 0.9, MEDIUM in `[0.5, 0.9]`, LOW < 0.5.
    pub confidence: f64,
    /// Error indicators per 100 characters.
    pub error_rate: f64,
    pub char_count: usize,
    pub indicators: ErrorIndicatorCounts,
}

impl OcrQualityReport {
    /// Report for text that cannot be assessed (null, empty, near-empty).
    pub fn unassessable(char_count: usize) -> Self {
        Self {
            level: OcrQualityLevel::Low,
            confidence: 0.0,
            error_rate: 0.0,
            char_count,
            indicators: ErrorIndicatorCounts::default(),
        }
    }

    pub fn needs_correction(&self) -> bool {
        self.level != OcrQualityLevel::High
    }
}
