//! Property tests for confidence scoring.

use chrono::{Duration, NaiveDate};
use predicate_core::models::{ContextEvidence, ScoreLabel};
use predicate_scoring::{ConfidenceScorer, HistoryStatus, ProductCodeMatch, ScoringInputs};
use proptest::prelude::*;

fn product_code() -> impl Strategy<Value = ProductCodeMatch> {
    prop_oneof![
        Just(ProductCodeMatch::Matched),
        Just(ProductCodeMatch::Unknown),
        Just(ProductCodeMatch::Mismatched),
    ]
}

fn history() -> impl Strategy<Value = HistoryStatus> {
    prop_oneof![
        Just(HistoryStatus::Clean),
        Just(HistoryStatus::Conditional),
        Just(HistoryStatus::Adverse),
        Just(HistoryStatus::Unknown),
    ]
}

prop_compose! {
    fn scoring_inputs()(
        se in any::<bool>(),
        testing in any::<bool>(),
        table in any::<bool>(),
        general in any::<bool>(),
        halves in 0u32..30,
        product_code in product_code(),
        age_days in prop::option::of(-400i64..12_000),
        history in history(),
    ) -> ScoringInputs {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        ScoringInputs {
            evidence: ContextEvidence {
                in_substantial_equivalence: se,
                in_testing_or_clinical: testing,
                in_table_ocr: table,
                in_general: general,
            },
            weighted_citations: halves as f64 * 0.5,
            product_code,
            decision_date: age_days.map(|d| as_of - Duration::days(d)),
            as_of,
            history,
        }
    }
}

proptest! {
    #[test]
    fn total_is_bounded_exact_sum(input in scoring_inputs()) {
        let score = ConfidenceScorer::default().score("K123456", "doc", &input);
        prop_assert!(score.total <= 100);
        prop_assert_eq!(score.total, score.components.total());
        prop_assert!(score.components.section_context <= 40);
        prop_assert!(score.components.citation_frequency <= 20);
        prop_assert!(score.components.product_code_match <= 15);
        prop_assert!(score.components.recency <= 15);
        prop_assert!(score.components.regulatory_history <= 10);
    }

    #[test]
    fn scoring_is_deterministic(input in scoring_inputs()) {
        let scorer = ConfidenceScorer::default();
        prop_assert_eq!(scorer.score("K1", "d", &input), scorer.score("K1", "d", &input));
    }

    #[test]
    fn label_matches_breakpoints(input in scoring_inputs()) {
        let score = ConfidenceScorer::default().score("K1", "d", &input);
        let expected = match score.total {
            80.. => ScoreLabel::Strong,
            60..=79 => ScoreLabel::Moderate,
            40..=59 => ScoreLabel::Weak,
            20..=39 => ScoreLabel::Poor,
            _ => ScoreLabel::Reject,
        };
        prop_assert_eq!(score.label, expected);
    }

    #[test]
    fn se_evidence_always_scores_40(input in scoring_inputs()) {
        let mut input = input;
        input.evidence.in_substantial_equivalence = true;
        let score = ConfidenceScorer::default().score("K1", "d", &input);
        prop_assert_eq!(score.components.section_context, 40);
    }

    #[test]
    fn more_citations_never_lower_the_score(input in scoring_inputs(), extra in 0u32..10) {
        let scorer = ConfidenceScorer::default();
        let base = scorer.score("K1", "d", &input);
        let mut more = input;
        more.weighted_citations += extra as f64 * 0.5;
        prop_assert!(scorer.score("K1", "d", &more).total >= base.total);
    }
}
