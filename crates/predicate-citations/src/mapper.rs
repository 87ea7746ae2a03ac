//! Occurrence-to-section mapping.

use predicate_core::models::{
    IdentifierOccurrence, OccurrenceContext, SectionSpan, SectionType, TextRegion,
};

use crate::extractor::IdentifierMatch;

/// The innermost span containing `offset`. Ties go to the earlier span.
pub fn enclosing_section(offset: usize, spans: &[SectionSpan]) -> Option<SectionType> {
    spans
        .iter()
        .filter(|span| span.contains(offset))
        .min_by_key(|span| (span.len(), span.start))
        .map(|span| span.section_type)
}

/// Label each match with its section and context.
///
/// A match inside an upstream table region is `TableOcr` whatever section
/// it falls in; the section is still recorded.
pub fn map_occurrences(
    matches: Vec<IdentifierMatch>,
    spans: &[SectionSpan],
    table_regions: &[TextRegion],
) -> Vec<IdentifierOccurrence> {
    matches
        .into_iter()
        .map(|m| {
            let section = enclosing_section(m.start, spans);
            let context = if table_regions.iter().any(|r| r.contains(m.start)) {
                OccurrenceContext::TableOcr
            } else {
                section.map_or(OccurrenceContext::General, OccurrenceContext::Section)
            };
            IdentifierOccurrence {
                identifier: m.identifier,
                start: m.start,
                end: m.end,
                section,
                context,
            }
        })
        .collect()
}
