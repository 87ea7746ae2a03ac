use predicate_core::config::ScoringPolicy;
use predicate_core::models::{ScoreComponents, ScoreLabel};

use crate::factors;
use crate::inputs::ScoringInputs;

/// Five-factor additive score.
///
/// ```text
/// total = section_context     (≤ 40)
///       + citation_frequency  (≤ 20)
///       + product_code_match  (≤ 15)
///       + recency             (≤ 15)
///       + regulatory_history  (≤ 10)
/// ```
pub fn compute(inputs: &ScoringInputs, policy: &ScoringPolicy) -> ScoreComponents {
    ScoreComponents {
        section_context: factors::section_context::calculate(
            &inputs.evidence,
            &policy.section_context,
        ),
        citation_frequency: factors::citation_frequency::calculate(
            inputs.weighted_citations,
            &policy.citation_frequency,
        ),
        product_code_match: factors::product_code::calculate(
            inputs.product_code,
            &policy.product_code,
        ),
        recency: factors::recency::calculate(inputs.decision_date, inputs.as_of, &policy.recency),
        regulatory_history: factors::regulatory_history::calculate(
            inputs.history,
            &policy.regulatory_history,
        ),
    }
}

/// Label for a total. Breakpoints are inclusive lower bounds.
pub fn label_for(total: u32, policy: &ScoringPolicy) -> ScoreLabel {
    policy
        .labels
        .iter()
        .find(|b| total >= b.min_total)
        .map_or(ScoreLabel::Reject, |b| b.label)
}
