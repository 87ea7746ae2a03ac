//! Tests for identifier extraction and section mapping.

use predicate_citations::{enclosing_section, extract_identifiers, map_occurrences};
use predicate_core::models::{
    DetectionTier, OccurrenceContext, SectionSpan, SectionType, TextRegion,
};

fn span(section_type: SectionType, start: usize, end: usize) -> SectionSpan {
    SectionSpan {
        section_type,
        start,
        end,
        heading_end: start,
        heading: section_type.to_string(),
        tier: DetectionTier::Direct,
        corrections: Vec::new(),
    }
}

// ── Extraction ──

#[test]
fn extracts_all_identifier_formats() {
    let text = "Predicates: K123456, P870001/S012, P950037 and DEN170073; also DEN1234567.";
    let ids: Vec<String> = extract_identifiers(text).into_iter().map(|m| m.identifier).collect();
    assert_eq!(ids, vec!["K123456", "P870001/S012", "P950037", "DEN170073", "DEN1234567"]);
}

#[test]
fn extraction_is_case_insensitive_and_normalizes() {
    let matches = extract_identifiers("cleared as k123456 (den170073)");
    assert_eq!(matches[0].identifier, "K123456");
    assert_eq!(matches[1].identifier, "DEN170073");
    assert_eq!(matches[0].start, 11);
    assert_eq!(matches[0].end, 18);
}

#[test]
fn duplicates_are_kept_as_distinct_occurrences() {
    let matches = extract_identifiers("K123456 ... K123456 ... K123456");
    assert_eq!(matches.len(), 3);
    assert!(matches.windows(2).all(|w| w[0].start < w[1].start));
}

#[test]
fn malformed_identifiers_are_ignored() {
    assert!(extract_identifiers("K12345 K1234567 XK123456 P12345 DEN12345 510(k)").is_empty());
}

// ── Mapping ──

#[test]
fn occurrence_in_span_gets_its_section() {
    let text = "Substantial Equivalence\nEquivalent to K123456.\n";
    let spans = vec![span(SectionType::SubstantialEquivalence, 0, text.len())];
    let occurrences = map_occurrences(extract_identifiers(text), &spans, &[]);
    assert_eq!(occurrences.len(), 1);
    assert_eq!(
        occurrences[0].context,
        OccurrenceContext::Section(SectionType::SubstantialEquivalence)
    );
    assert!(occurrences[0].context.is_substantial_equivalence());
}

#[test]
fn no_sections_means_general() {
    let occurrences = map_occurrences(extract_identifiers("see K123456"), &[], &[]);
    assert_eq!(occurrences[0].context, OccurrenceContext::General);
    assert_eq!(occurrences[0].section, None);
}

#[test]
fn span_end_is_exclusive() {
    let spans = vec![span(SectionType::Labeling, 0, 4)];
    assert_eq!(enclosing_section(3, &spans), Some(SectionType::Labeling));
    assert_eq!(enclosing_section(4, &spans), None);
}

#[test]
fn innermost_span_wins() {
    let spans = vec![
        span(SectionType::Summary510k, 0, 100),
        span(SectionType::PredicateComparison, 20, 40),
    ];
    assert_eq!(enclosing_section(25, &spans), Some(SectionType::PredicateComparison));
    assert_eq!(enclosing_section(50, &spans), Some(SectionType::Summary510k));
}

#[test]
fn table_region_overrides_section() {
    let text = "Substantial Equivalence\n| K123456 | cleared |\n";
    let start = text.find("K123456").unwrap();
    let spans = vec![span(SectionType::SubstantialEquivalence, 0, text.len())];
    let regions = vec![TextRegion::new(start - 2, start + 20)];
    let occurrences = map_occurrences(extract_identifiers(text), &spans, &regions);
    assert_eq!(occurrences[0].context, OccurrenceContext::TableOcr);
    assert_eq!(occurrences[0].section, Some(SectionType::SubstantialEquivalence));
    assert!(!occurrences[0].context.is_substantial_equivalence());
}
