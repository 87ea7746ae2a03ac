//! Property tests for section detection.

use predicate_core::models::{
    DetectionTier, ErrorIndicatorCounts, OcrQualityLevel, OcrQualityReport,
};
use predicate_sections::SectionDetector;
use proptest::prelude::*;

const LINES: &[&str] = &[
    "Substantial Equivalence",
    "7. Biocompatibility",
    "8iocompatibility 7esting",
    "Cyber security",
    "Labeling",
    "5terilization",
    "The subject device is equivalent to K123456.",
    "Testing was performed per ISO 10993-5.",
    "| |ndications f0r Use",
    "",
    "Predicate Device Comparison",
    "Some ordinary body text without any heading words at all",
];

fn level() -> impl Strategy<Value = OcrQualityLevel> {
    prop_oneof![
        Just(OcrQualityLevel::High),
        Just(OcrQualityLevel::Medium),
        Just(OcrQualityLevel::Low),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LINES), 0..40).prop_map(|lines| lines.join("\n"))
}

fn report(level: OcrQualityLevel) -> OcrQualityReport {
    OcrQualityReport {
        level,
        confidence: 0.5,
        error_rate: 1.0,
        char_count: 0,
        indicators: ErrorIndicatorCounts::default(),
    }
}

proptest! {
    #[test]
    fn spans_never_overlap(text in document(), level in level()) {
        let spans = SectionDetector::default().detect(&text, &report(level));
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
        for span in &spans {
            prop_assert!(span.start < span.end || span.start == text.len());
            prop_assert!(span.end <= text.len());
            prop_assert!(text.is_char_boundary(span.end));
        }
    }

    #[test]
    fn high_quality_has_no_tier2(text in document()) {
        let detection = SectionDetector::default().detect_detailed(&text, &report(OcrQualityLevel::High));
        prop_assert!(!detection.stats.tier2_invoked);
        for span in &detection.spans {
            prop_assert_eq!(span.tier, DetectionTier::Direct);
            prop_assert!(span.corrections.is_empty());
        }
    }

    #[test]
    fn detection_is_deterministic(text in document(), level in level()) {
        let detector = SectionDetector::default();
        prop_assert_eq!(detector.detect(&text, &report(level)), detector.detect(&text, &report(level)));
    }

    #[test]
    fn tier2_spans_carry_corrections(text in document()) {
        let spans = SectionDetector::default().detect(&text, &report(OcrQualityLevel::Low));
        for span in spans.iter().filter(|s| s.tier == DetectionTier::OcrCorrected) {
            prop_assert!(!span.corrections.is_empty());
        }
    }
}
