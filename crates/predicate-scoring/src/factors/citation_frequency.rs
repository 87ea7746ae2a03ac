use predicate_core::config::scoring_config::CitationPoints;

/// First breakpoint reached by the weighted citation sum, else the floor.
pub fn calculate(weighted_citations: f64, points: &CitationPoints) -> u32 {
    points
        .breakpoints
        .iter()
        .find(|b| weighted_citations >= b.threshold)
        .map_or(points.floor, |b| b.points)
}
