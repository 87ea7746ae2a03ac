use predicate_core::config::scoring_config::ProductCodePoints;

use crate::inputs::ProductCodeMatch;

pub fn calculate(status: ProductCodeMatch, points: &ProductCodePoints) -> u32 {
    match status {
        ProductCodeMatch::Matched => points.matched,
        ProductCodeMatch::Unknown => points.unknown,
        ProductCodeMatch::Mismatched => points.mismatched,
    }
}
