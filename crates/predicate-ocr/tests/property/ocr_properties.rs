//! Property tests for OCR estimation and correction.

use predicate_core::config::OcrConfig;
use predicate_core::models::{CorrectionKind, OcrQualityLevel};
use predicate_ocr::{OcrCorrector, OcrQualityEstimator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_matches_level_band(text in "[a-zA-Z0-9|$@ .\n]{0,400}") {
        let report = OcrQualityEstimator::new(OcrConfig::default()).estimate(&text);
        prop_assert!((0.0..=1.0).contains(&report.confidence));
        match report.level {
            OcrQualityLevel::High => prop_assert!(report.confidence >= 0.9),
            OcrQualityLevel::Medium => prop_assert!((0.5..=0.9).contains(&report.confidence)),
            OcrQualityLevel::Low => prop_assert!(report.confidence < 0.5),
        }
    }

    #[test]
    fn estimation_is_deterministic(text in "[a-zA-Z0-9 .]{0,300}") {
        let estimator = OcrQualityEstimator::new(OcrConfig::default());
        prop_assert_eq!(estimator.estimate(&text), estimator.estimate(&text));
    }

    #[test]
    fn substitutions_never_exceed_limit(line in "[a-zA-Z0-9|$@ ]{0,80}", limit in 0usize..4) {
        let corrected = OcrCorrector::new(limit).correct(&line, &|_| false);
        let glyphs = corrected
            .corrections
            .iter()
            .filter(|c| c.kind == CorrectionKind::GlyphSubstitution)
            .count();
        prop_assert!(glyphs <= limit);
    }

    #[test]
    fn glyph_pass_preserves_length(line in "[a-zA-Z0-9 ]{0,80}") {
        let corrected = OcrCorrector::default().correct(&line, &|_| false);
        prop_assert_eq!(corrected.text.len(), line.len());
    }
}
