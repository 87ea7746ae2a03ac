//! Reclassification table over (prior, found in SE, found elsewhere).
//!
//! Predicate: SE → confirmed; elsewhere only → uncertain (needs review).
//! Reference: SE → predicate (reclassified up); elsewhere only → confirmed.
//! Unknown: SE → predicate (new finding); elsewhere only → reference (new finding).
//! No evidence at all: Reference stays; Predicate and Unknown become uncertain.

use predicate_core::models::{DecisionBasis, FinalClassification, PriorClassification};

/// One row of the reclassification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclassificationRule {
    pub prior: PriorClassification,
    pub in_se: bool,
    pub found_elsewhere: bool,
    pub result: FinalClassification,
    pub basis: DecisionBasis,
}

const fn rule(
    prior: PriorClassification,
    in_se: bool,
    found_elsewhere: bool,
    result: FinalClassification,
    basis: DecisionBasis,
) -> ReclassificationRule {
    ReclassificationRule {
        prior,
        in_se,
        found_elsewhere,
        result,
        basis,
    }
}

/// All 12 rows. SE rows are identical with and without other evidence.
pub fn all_rules() -> Vec<ReclassificationRule> {
    use DecisionBasis::*;
    use FinalClassification as F;
    use PriorClassification as P;

    vec![
        // Predicate
        rule(P::Predicate, true, true, F::Predicate, Confirmed),
        rule(P::Predicate, true, false, F::Predicate, Confirmed),
        rule(P::Predicate, false, true, F::Uncertain, NeedsReview),
        rule(P::Predicate, false, false, F::Uncertain, NoEvidence),
        // Reference
        rule(P::Reference, true, true, F::Predicate, ReclassifiedUp),
        rule(P::Reference, true, false, F::Predicate, ReclassifiedUp),
        rule(P::Reference, false, true, F::Reference, Confirmed),
        rule(P::Reference, false, false, F::Reference, Confirmed),
        // Unknown
        rule(P::Unknown, true, true, F::Predicate, NewFinding),
        rule(P::Unknown, true, false, F::Predicate, NewFinding),
        rule(P::Unknown, false, true, F::Reference, NewFinding),
        rule(P::Unknown, false, false, F::Uncertain, NoEvidence),
    ]
}

/// The row matching the given evidence.
pub fn find_applicable_rule(
    prior: PriorClassification,
    in_se: bool,
    found_elsewhere: bool,
) -> Option<ReclassificationRule> {
    all_rules()
        .into_iter()
        .find(|r| r.prior == prior && r.in_se == in_se && r.found_elsewhere == found_elsewhere)
}
