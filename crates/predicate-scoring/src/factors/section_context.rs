use predicate_core::config::scoring_config::SectionContextPoints;
use predicate_core::models::ContextEvidence;

/// Best context the identifier was found in within the citing document.
///
/// SE presence dominates everything else; with no evidence at all the
/// occurrence is treated as general text.
pub fn calculate(evidence: &ContextEvidence, points: &SectionContextPoints) -> u32 {
    [
        (evidence.in_substantial_equivalence, points.substantial_equivalence),
        (evidence.in_testing_or_clinical, points.testing_or_clinical),
        (evidence.in_table_ocr, points.table_ocr),
        (evidence.in_general || evidence.is_empty(), points.general),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, pts)| pts)
    .max()
    .unwrap_or(points.general)
}
