//! Property tests for risk flag evaluation.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use predicate_core::models::{ExclusionList, FlagKind, RegulatoryHistory};
use predicate_risk::RiskFlagEngine;
use proptest::prelude::*;

prop_compose! {
    fn record()(
        age_days in prop::option::of(0i64..15_000),
        recalls in prop::option::of(0u32..3),
        deaths in prop::option::of(0u64..3),
        events in prop::option::of(0u64..300),
        class in prop::option::of(1u8..=3),
        withdrawn in prop::option::of(any::<bool>()),
        actions in prop::option::of(0u32..3),
    ) -> RegulatoryHistory {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        RegulatoryHistory {
            decision_date: age_days.map(|d| as_of - Duration::days(d)),
            recall_count: recalls,
            adverse_event_death_count: deaths,
            adverse_event_count: events,
            device_class: class,
            withdrawn,
            enforcement_action_count: actions,
            ..RegulatoryHistory::new("K123456")
        }
    }
}

proptest! {
    #[test]
    fn at_most_one_flag_per_kind(record in record()) {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let flags = RiskFlagEngine::default()
            .evaluate("K123456", Some(&record), &["DQY"], &ExclusionList::new(), as_of);
        let distinct: BTreeSet<FlagKind> = flags.iter().map(|f| f.kind).collect();
        prop_assert_eq!(distinct.len(), flags.len());
    }

    #[test]
    fn evaluation_is_deterministic(record in record()) {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let engine = RiskFlagEngine::default();
        let a = engine.evaluate("K123456", Some(&record), &[], &ExclusionList::new(), as_of);
        let b = engine.evaluate("K123456", Some(&record), &[], &ExclusionList::new(), as_of);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_record_510k_is_never_flagged(digits in 0u32..1_000_000) {
        let identifier = format!("K{digits:06}");
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let flags = RiskFlagEngine::default()
            .evaluate(&identifier, None, &["DQY"], &ExclusionList::new(), as_of);
        prop_assert!(flags.is_empty());
    }
}
