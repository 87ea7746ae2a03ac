//! Property tests for the reclassification table.

use predicate_core::models::{ContextEvidence, PriorClassification};
use predicate_reclassification::{all_rules, find_applicable_rule, ReclassificationEngine};
use proptest::prelude::*;

fn prior() -> impl Strategy<Value = PriorClassification> {
    prop_oneof![
        Just(PriorClassification::Predicate),
        Just(PriorClassification::Reference),
        Just(PriorClassification::Unknown),
    ]
}

#[test]
fn table_is_total_and_unambiguous() {
    let rules = all_rules();
    for prior in [
        PriorClassification::Predicate,
        PriorClassification::Reference,
        PriorClassification::Unknown,
    ] {
        for in_se in [true, false] {
            for elsewhere in [true, false] {
                let matching = rules
                    .iter()
                    .filter(|r| r.prior == prior && r.in_se == in_se && r.found_elsewhere == elsewhere)
                    .count();
                assert_eq!(matching, 1, "{prior:?} se={in_se} elsewhere={elsewhere}");
            }
        }
    }
}

proptest! {
    #[test]
    fn every_combination_has_a_rule(prior in prior(), in_se in any::<bool>(), elsewhere in any::<bool>()) {
        prop_assert!(find_applicable_rule(prior, in_se, elsewhere).is_some());
    }

    #[test]
    fn se_presence_decides_alone(
        prior in prior(),
        testing in any::<bool>(),
        table in any::<bool>(),
        general in any::<bool>(),
    ) {
        let engine = ReclassificationEngine::new();
        let with_se = ContextEvidence {
            in_substantial_equivalence: true,
            in_testing_or_clinical: testing,
            in_table_ocr: table,
            in_general: general,
        };
        let se_only = ContextEvidence {
            in_substantial_equivalence: true,
            ..ContextEvidence::default()
        };
        let a = engine.decide("K123456", "d", prior, &with_se);
        let b = engine.decide("K123456", "d", prior, &se_only);
        prop_assert_eq!(a.result, b.result);
        prop_assert_eq!(a.basis, b.basis);
    }
}
