//! Property tests for citation aggregation.

use predicate_citations::CitationAggregator;
use predicate_core::models::{IdentifierOccurrence, OccurrenceContext, SectionType};
use proptest::prelude::*;

fn context() -> impl Strategy<Value = OccurrenceContext> {
    prop_oneof![
        Just(OccurrenceContext::General),
        Just(OccurrenceContext::TableOcr),
        Just(OccurrenceContext::Section(SectionType::SubstantialEquivalence)),
        Just(OccurrenceContext::Section(SectionType::Biocompatibility)),
    ]
}

fn documents() -> impl Strategy<Value = Vec<(String, Vec<(u8, OccurrenceContext)>)>> {
    prop::collection::vec(
        (
            "doc-[a-f]",
            prop::collection::vec((0u8..4, context()), 0..10),
        ),
        0..12,
    )
}

proptest! {
    #[test]
    fn counts_and_weights_are_bounded(docs in documents()) {
        let mut aggregator = CitationAggregator::new();
        for (doc, occurrences) in &docs {
            let occurrences: Vec<IdentifierOccurrence> = occurrences
                .iter()
                .map(|(n, context)| IdentifierOccurrence {
                    identifier: format!("K00000{n}"),
                    start: 0,
                    end: 7,
                    section: None,
                    context: *context,
                })
                .collect();
            aggregator.add_document(doc, &occurrences);
        }
        for record in aggregator.finish().values() {
            prop_assert!(record.citation_count() >= 1);
            prop_assert!(record.citation_count() <= 6);
            for weight in record.weights.values() {
                prop_assert!(*weight == 0.5 || *weight == 1.0);
            }
            let count = record.citation_count() as f64;
            prop_assert!(record.weighted_count() >= 0.5 * count);
            prop_assert!(record.weighted_count() <= count);
        }
    }
}
