//! End-to-end pipeline behavior.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use predicate_core::config::PredicateConfig;
use predicate_core::errors::ConfigError;
use predicate_core::models::{
    DocumentText, ExclusionList, FlagKind, LookupStatus, OccurrenceContext, OcrQualityLevel,
    PriorClassification, RecallClass, RegulatoryHistory, SectionType, SourceHint,
};
use predicate_core::traits::InMemoryLookup;
use predicate_engine::tracing_setup::spans::names;
use predicate_engine::{init_tracing, BatchInput, PredicateEngine, PriorLabels};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn se_doc(id: &str, identifier: &str) -> DocumentText {
    DocumentText::new(
        id,
        format!("Substantial Equivalence\nThe device is substantially equivalent to {identifier}.\n"),
    )
}

fn general_doc(id: &str, identifier: &str) -> DocumentText {
    DocumentText::new(
        id,
        format!("This letter mentions the earlier device {identifier} for background only.\n"),
    )
}

// ── Document analysis ──

#[test]
fn zero_sections_gives_general_context_worth_10() {
    let input = BatchInput::new(vec![general_doc("d1", "K123456")], as_of());
    let report = PredicateEngine::default().run(&input, &InMemoryLookup::new());

    let doc = report.document("d1").unwrap();
    assert!(doc.sections.is_empty());
    assert_eq!(doc.occurrences.len(), 1);
    assert_eq!(doc.occurrences[0].context, OccurrenceContext::General);
    let score = &report.identifier("K123456").unwrap().scores[0];
    assert_eq!(score.components.section_context, 10);
}

#[test]
fn content_hash_is_blake3_of_text() {
    let doc = se_doc("d1", "K123456");
    let analysis = PredicateEngine::default().analyze_document(&doc);
    let expected = blake3::hash(doc.text().unwrap().as_bytes()).to_hex().to_string();
    assert_eq!(analysis.content_hash, expected);
    assert!(!analysis.malformed);
}

#[test]
fn malformed_document_degrades_without_failing_batch() {
    let docs = vec![
        DocumentText::missing("broken"),
        DocumentText::from_bytes("bytes", vec![0x4b, 0xff, 0x00]),
        se_doc("ok", "K123456"),
    ];
    let report = PredicateEngine::default().run(&BatchInput::new(docs, as_of()), &InMemoryLookup::new());

    for id in ["broken", "bytes"] {
        let doc = report.document(id).unwrap();
        assert!(doc.malformed);
        assert_eq!(doc.quality.level, OcrQualityLevel::Low);
        assert!(doc.sections.is_empty());
        assert!(doc.occurrences.is_empty());
        assert!(doc.content_hash.is_empty());
    }
    assert!(report.identifier("K123456").is_some());
}

#[test]
fn empty_text_is_low_quality_not_malformed() {
    let analysis = PredicateEngine::default().analyze_document(&DocumentText::new("e", ""));
    assert!(!analysis.malformed);
    assert_eq!(analysis.quality.level, OcrQualityLevel::Low);
    assert!(analysis.sections.is_empty());
}

#[test]
fn scanned_hint_enables_tier2_on_otherwise_high_quality_text() {
    let text = "Bio compatibility\n\
        Cytotoxicity, sensitization and irritation testing were performed on the finished device. \
        All results met the acceptance criteria defined in the protocol. \
        The device materials have a long history of safe use in similar products. \
        No further biological testing was considered necessary by the sponsor.\n";
    let engine = PredicateEngine::default();
    let digital = engine.analyze_document(&DocumentText::new("d", text).with_source_hint(SourceHint::Digital));
    let scanned = engine.analyze_document(&DocumentText::new("s", text).with_source_hint(SourceHint::Scanned));

    assert_eq!(digital.quality.level, OcrQualityLevel::High);
    assert!(digital.sections.is_empty());

    assert_eq!(scanned.quality.level, OcrQualityLevel::Medium);
    assert_eq!(scanned.tier2_count(), 1);
    assert_eq!(scanned.sections[0].section_type, predicate_core::SectionType::Biocompatibility);
}

#[test]
fn comparison_table_rows_keep_citation_in_se() {
    let doc = DocumentText::new(
        "d1",
        "Substantial Equivalence\n\
The table below compares the subject and predicate devices.\n\
Sterilization: EO, identical to predicate\n\
Software: same as predicate\n\
The predicate device is K123456 cleared in 2023.\n",
    );
    let report = PredicateEngine::default().run(&BatchInput::new(vec![doc], as_of()), &InMemoryLookup::new());

    let analysis = report.document("d1").unwrap();
    assert_eq!(analysis.sections.len(), 1);
    assert_eq!(
        analysis.occurrences[0].context,
        OccurrenceContext::Section(SectionType::SubstantialEquivalence)
    );
    let k = report.identifier("K123456").unwrap();
    assert_eq!(k.scores[0].components.section_context, 40);
    assert!(k.decisions[0].found_in_se);
}

#[test]
fn batch_preserves_input_order_with_any_worker_count() {
    let docs: Vec<DocumentText> = (0..12)
        .map(|i| se_doc(&format!("doc-{i:02}"), &format!("K{:06}", 100_000 + i)))
        .collect();
    let mut sequential = PredicateConfig::default();
    sequential.engine.workers = 1;
    let mut parallel = PredicateConfig::default();
    parallel.engine.workers = 4;

    let a = PredicateEngine::new(sequential).unwrap().analyze_batch(&docs);
    let b = PredicateEngine::new(parallel).unwrap().analyze_batch(&docs);
    assert_eq!(a, b);
    let ids: Vec<&str> = a.iter().map(|d| d.document_id.as_str()).collect();
    let expected: Vec<String> = (0..12).map(|i| format!("doc-{i:02}")).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn engine_rejects_invalid_config() {
    let mut zero_allowance = PredicateConfig::default();
    zero_allowance.ocr.pipe_allowance_chars = 0;
    assert!(matches!(
        PredicateEngine::new(zero_allowance),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "ocr.pipe_allowance_chars"
    ));

    let mut over_100 = PredicateConfig::default();
    over_100.scoring.policy.section_context.substantial_equivalence = 60;
    assert!(matches!(
        PredicateEngine::new(over_100),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "scoring.policy"
    ));

    assert!(PredicateEngine::new(PredicateConfig::default()).is_ok());
}

// ── Aggregation ──

#[test]
fn five_se_documents_score_citation_frequency_20() {
    let docs = (1..=5).map(|i| se_doc(&format!("d{i}"), "K123456")).collect();
    let report = PredicateEngine::default().run(&BatchInput::new(docs, as_of()), &InMemoryLookup::new());
    let identifier = report.identifier("K123456").unwrap();
    assert_eq!(identifier.citation.citation_count(), 5);
    assert_eq!(identifier.scores.len(), 5);
    assert!(identifier.scores.iter().all(|s| s.components.citation_frequency == 20));
}

#[test]
fn single_citation_scores_5_in_any_context() {
    for doc in [se_doc("d", "K123456"), general_doc("d", "K123456")] {
        let report =
            PredicateEngine::default().run(&BatchInput::new(vec![doc], as_of()), &InMemoryLookup::new());
        let score = &report.identifier("K123456").unwrap().scores[0];
        assert_eq!(score.components.citation_frequency, 5);
    }
}

#[test]
fn repeated_occurrences_in_one_document_count_once() {
    let doc = DocumentText::new(
        "d",
        "Substantial Equivalence\nK123456 is the predicate. See also K123456 and k123456.\n",
    );
    let report =
        PredicateEngine::default().run(&BatchInput::new(vec![doc], as_of()), &InMemoryLookup::new());
    assert_eq!(report.document("d").unwrap().occurrences.len(), 3);
    let identifier = report.identifier("K123456").unwrap();
    assert_eq!(identifier.citation.citation_count(), 1);
    assert_eq!(identifier.scores.len(), 1);
}

#[test]
fn duplicate_document_ids_merge_evidence() {
    let docs = vec![general_doc("dup", "K123456"), se_doc("dup", "K123456")];
    let report = PredicateEngine::default().run(&BatchInput::new(docs, as_of()), &InMemoryLookup::new());

    let k = report.identifier("K123456").unwrap();
    assert_eq!(k.citation.citation_count(), 1);
    assert_eq!(k.citation.weight_for("dup"), Some(1.0));
    assert_eq!(k.scores.len(), 1);
    assert_eq!(k.scores[0].components.section_context, 40);
    assert!(k.decisions[0].found_in_se);
    assert!(k.decisions[0].found_in_general);
}

// ── Scoring vs. flags ──

#[test]
fn flags_never_change_scores() {
    let docs = vec![se_doc("d1", "K123456").with_product_code("DQY")];
    let base = RegulatoryHistory {
        decision_date: NaiveDate::from_ymd_opt(2021, 1, 1),
        product_code: Some("DQY".to_string()),
        ..RegulatoryHistory::new("K123456")
    };
    let flagged = RegulatoryHistory {
        device_class: Some(3),
        adverse_event_count: Some(5_000),
        summary_type: Some(predicate_core::models::SummaryType::Statement),
        ..base.clone()
    };
    let engine = PredicateEngine::default();
    let plain = BatchInput::new(docs.clone(), as_of());
    let excluded = BatchInput::new(docs, as_of())
        .with_exclusions(ExclusionList::new().with("K123456", "do not cite"));

    let a = engine.run(&plain, &InMemoryLookup::new().with_record(base));
    let b = engine.run(&excluded, &InMemoryLookup::new().with_record(flagged));

    let a = a.identifier("K123456").unwrap();
    let b = b.identifier("K123456").unwrap();
    assert!(a.flags.is_empty());
    assert!(b.flags.len() >= 4);
    assert!(b.has_prominent_flag());
    assert_eq!(
        a.scores.iter().map(|s| (s.components, s.total, s.label)).collect::<Vec<_>>(),
        b.scores.iter().map(|s| (s.components, s.total, s.label)).collect::<Vec<_>>(),
    );
}

#[test]
fn enforcement_action_zeroes_history_and_flags_high() {
    let docs = vec![se_doc("d1", "K123456")];
    let record = RegulatoryHistory {
        enforcement_action_count: Some(2),
        ..RegulatoryHistory::new("K123456")
    };
    let report = PredicateEngine::default().run(
        &BatchInput::new(docs, as_of()),
        &InMemoryLookup::new().with_record(record),
    );
    let k = report.identifier("K123456").unwrap();
    assert_eq!(k.scores[0].components.regulatory_history, 0);
    assert!(k.flags.iter().any(|f| f.kind == FlagKind::EnforcementAction));
    assert!(k.has_prominent_flag());
}

#[test]
fn high_score_with_critical_flag_is_reported_as_is() {
    let docs: Vec<DocumentText> = (1..=5)
        .map(|i| se_doc(&format!("d{i}"), "K123456").with_product_code("DQY"))
        .collect();
    let record = RegulatoryHistory {
        decision_date: NaiveDate::from_ymd_opt(2023, 1, 1),
        product_code: Some("DQY".to_string()),
        recall_count: Some(0),
        withdrawn: Some(false),
        adverse_event_death_count: Some(1),
        ..RegulatoryHistory::new("K123456")
    };
    let report = PredicateEngine::default().run(
        &BatchInput::new(docs, as_of()),
        &InMemoryLookup::new().with_record(record),
    );
    let identifier = report.identifier("K123456").unwrap();
    let kinds: BTreeSet<FlagKind> = identifier.flags.iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&FlagKind::DeathEvents));
    // Death events also zero the history factor.
    assert!(identifier.scores.iter().all(|s| s.total == 40 + 20 + 15 + 15));
}

#[test]
fn scores_total_is_sum_and_bounded() {
    let docs = vec![
        se_doc("a", "K111111"),
        general_doc("b", "K111111"),
        general_doc("c", "P123456"),
    ];
    let record = RegulatoryHistory {
        recall_classes: [RecallClass::ClassI].into_iter().collect(),
        ..RegulatoryHistory::new("K111111")
    };
    let report = PredicateEngine::default().run(
        &BatchInput::new(docs, as_of()),
        &InMemoryLookup::new().with_record(record),
    );
    for identifier in &report.identifiers {
        for score in &identifier.scores {
            assert_eq!(score.total, score.components.total());
            assert!(score.total <= 100);
        }
    }
}

#[test]
fn identical_runs_give_identical_scores() {
    let docs = vec![se_doc("a", "K111111"), general_doc("b", "K111111")];
    let input = BatchInput::new(docs, as_of());
    let engine = PredicateEngine::default();
    let a = engine.run(&input, &InMemoryLookup::new());
    let b = engine.run(&input, &InMemoryLookup::new());
    assert_ne!(a.run_id, b.run_id);
    assert_eq!(a.documents, b.documents);
    for (x, y) in a.identifiers.iter().zip(&b.identifiers) {
        assert_eq!(x.scores, y.scores);
        assert_eq!(x.flags, y.flags);
    }
}

// ── Lookup ──

#[test]
fn unavailable_lookup_degrades_to_unknown() {
    let docs = vec![se_doc("d", "K123456")];
    let report = PredicateEngine::default().run(
        &BatchInput::new(docs, as_of()),
        &InMemoryLookup::new().with_unavailable("K123456"),
    );
    let identifier = report.identifier("K123456").unwrap();
    assert_eq!(identifier.lookup_status, LookupStatus::Unavailable);
    let c = identifier.scores[0].components;
    assert_eq!((c.product_code_match, c.recency, c.regulatory_history), (8, 5, 5));
    assert!(identifier.flags.is_empty());
}

// ── Reclassification ──

#[test]
fn priors_drive_decisions_per_document() {
    let docs = vec![se_doc("a", "K111111"), general_doc("b", "K111111"), general_doc("c", "K222222")];
    let priors = PriorLabels::new()
        .with("K111111", "a", PriorClassification::Reference)
        .with("K111111", "b", PriorClassification::Predicate)
        .with("K333333", "c", PriorClassification::Predicate);
    let report = PredicateEngine::default().run(
        &BatchInput::new(docs, as_of()).with_priors(priors),
        &InMemoryLookup::new(),
    );

    let k1 = report.identifier("K111111").unwrap();
    let bases: Vec<_> = k1.decisions.iter().map(|d| (d.document_id.as_str(), d.basis)).collect();
    use predicate_core::models::DecisionBasis::*;
    assert_eq!(bases, vec![("a", ReclassifiedUp), ("b", NeedsReview)]);

    // Labelled but never found in its document.
    let k3 = report.identifier("K333333").unwrap();
    assert_eq!(k3.citation.citation_count(), 0);
    assert!(k3.scores.is_empty());
    assert_eq!(k3.decisions.len(), 1);
    assert_eq!(k3.decisions[0].basis, NoEvidence);
    assert!(report.identifiers.iter().flat_map(|r| &r.decisions).all(|d| d.run_id == report.run_id));
}

#[test]
fn prior_labels_are_case_insensitive_on_identifier() {
    let priors = PriorLabels::new().with("k123456", "d", PriorClassification::Reference);
    assert_eq!(priors.get("K123456", "d"), PriorClassification::Reference);
    assert_eq!(priors.get("K123456", "other"), PriorClassification::Unknown);
    assert_eq!(priors.len(), 1);
}

// ── Report ──

#[test]
fn report_stamps_version_and_pattern_health() {
    let report = PredicateEngine::default().run(
        &BatchInput::new(vec![se_doc("d", "K123456")], as_of()),
        &InMemoryLookup::new(),
    );
    assert_eq!(report.engine_version, predicate_core::constants::VERSION);
    assert!(report.failed_section_patterns.is_empty());
    assert_eq!(report.as_of, as_of());
    let pretty = report.to_json_pretty().unwrap();
    assert!(pretty.contains("\"K123456\""));
}

// ── Tracing ──

#[test]
fn init_tracing_is_idempotent() {
    let config = PredicateConfig::default().observability;
    init_tracing(&config);
    init_tracing(&config);
    assert_eq!(names::DOCUMENT, "predicate.document");
    assert_eq!(names::BATCH, "predicate.batch");
}
