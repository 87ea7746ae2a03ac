//! OCR quality estimation.
//!
//! Three indicator families are counted over the whole text:
//! look-alike digits/symbols inside alphabetic words, `|` glyphs beyond a
//! small allowance, and heading keywords split in two by a stray space.
//! The total is normalized per 100 characters and banded into a level.

use predicate_core::config::OcrConfig;
use predicate_core::constants::ERROR_RATE_UNIT_CHARS;
use predicate_core::models::{ErrorIndicatorCounts, OcrQualityLevel, OcrQualityReport, SourceHint};

use crate::glyphs::{is_alpha_dominant, lookalike, suspicious_glyphs, tokens};
use crate::keywords::is_split_keyword;

/// Minimum letters for a token to be judged as a word.
const MIN_WORD_LETTERS: usize = 3;

/// Confidence at the HIGH/MEDIUM boundary.
const HIGH_CONFIDENCE_FLOOR: f64 = 0.9;
/// Confidence at the MEDIUM/LOW boundary.
const MEDIUM_CONFIDENCE_FLOOR: f64 = 0.5;
/// Largest confidence a LOW report may carry.
const LOW_CONFIDENCE_CEILING: f64 = 0.49;

/// Estimates OCR quality from raw text.
#[derive(Debug, Clone, Default)]
pub struct OcrQualityEstimator {
    config: OcrConfig,
}

impl OcrQualityEstimator {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Estimate quality from text alone.
    pub fn estimate(&self, text: &str) -> OcrQualityReport {
        let char_count = text.chars().count();
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        if visible < self.config.min_estimable_chars {
            return OcrQualityReport::unassessable(char_count);
        }

        let indicators = self.count_indicators(text, char_count);
        let error_rate = indicators.total() as f64 * ERROR_RATE_UNIT_CHARS / char_count as f64;
        let (level, confidence) = self.band(error_rate);

        OcrQualityReport {
            level,
            confidence,
            error_rate,
            char_count,
            indicators,
        }
    }

    /// Estimate quality, letting a declared `scanned` origin cap the level at MEDIUM.
    pub fn estimate_with_hint(&self, text: &str, hint: Option<SourceHint>) -> OcrQualityReport {
        let mut report = self.estimate(text);
        if self.config.trust_scanned_hint
            && hint == Some(SourceHint::Scanned)
            && report.level == OcrQualityLevel::High
        {
            report.level = OcrQualityLevel::Medium;
            report.confidence = report.confidence.min(HIGH_CONFIDENCE_FLOOR);
        }
        report
    }

    fn count_indicators(&self, text: &str, char_count: usize) -> ErrorIndicatorCounts {
        let mut counts = ErrorIndicatorCounts::default();

        let words: Vec<&str> = tokens(text)
            .map(|(_, token)| {
                token.trim_matches(|c: char| !c.is_alphanumeric() && lookalike(c).is_none())
            })
            .collect();

        for word in &words {
            if is_alpha_dominant(word, MIN_WORD_LETTERS) {
                counts.substitutions += suspicious_glyphs(word)
                    .iter()
                    .filter(|(_, c)| *c != '|')
                    .count();
            }
        }

        let pipes = text.chars().filter(|c| *c == '|').count();
        let allowance = char_count
            .checked_div(self.config.pipe_allowance_chars)
            .unwrap_or(0)
            .max(1);
        counts.misread_glyphs = pipes.saturating_sub(allowance);

        counts.split_words = words
            .windows(2)
            .filter(|pair| is_split_keyword(pair[0], pair[1]))
            .count();

        counts
    }

    /// Map an error rate onto a level and a confidence continuous within the band.
    fn band(&self, error_rate: f64) -> (OcrQualityLevel, f64) {
        let high = self.config.high_quality_max_error_rate;
        let low = self.config.low_quality_min_error_rate;

        if error_rate < high {
            let confidence = 1.0 - (1.0 - HIGH_CONFIDENCE_FLOOR) * error_rate / high;
            (OcrQualityLevel::High, confidence.clamp(HIGH_CONFIDENCE_FLOOR, 1.0))
        } else if error_rate < low {
            let fraction = (error_rate - high) / (low - high);
            let confidence =
                HIGH_CONFIDENCE_FLOOR - fraction * (HIGH_CONFIDENCE_FLOOR - MEDIUM_CONFIDENCE_FLOOR);
            (
                OcrQualityLevel::Medium,
                confidence.clamp(MEDIUM_CONFIDENCE_FLOOR, HIGH_CONFIDENCE_FLOOR),
            )
        } else {
            let confidence = if error_rate > 0.0 {
                LOW_CONFIDENCE_CEILING * low / error_rate
            } else {
                0.0
            };
            (OcrQualityLevel::Low, confidence.clamp(0.0, LOW_CONFIDENCE_CEILING))
        }
    }
}
