//! Tests for the reclassification table, engine, and decision ledger.

use chrono::{TimeZone, Utc};
use predicate_core::errors::LedgerError;
use predicate_core::models::{
    ContextEvidence, DecisionBasis, FinalClassification, OccurrenceContext, PriorClassification,
    SectionType,
};
use predicate_reclassification::{
    all_rules, find_applicable_rule, DecisionLedger, ReclassificationEngine,
};
use uuid::Uuid;

const SE: OccurrenceContext = OccurrenceContext::Section(SectionType::SubstantialEquivalence);
const COMPARISON: OccurrenceContext = OccurrenceContext::Section(SectionType::PredicateComparison);
const BIO: OccurrenceContext = OccurrenceContext::Section(SectionType::Biocompatibility);

fn evidence(contexts: &[OccurrenceContext]) -> ContextEvidence {
    ContextEvidence::from_contexts(contexts.iter().copied())
}

fn outcome(
    prior: PriorClassification,
    contexts: &[OccurrenceContext],
) -> (FinalClassification, DecisionBasis) {
    let decision = ReclassificationEngine::new().decide("K123456", "doc-1", prior, &evidence(contexts));
    (decision.result, decision.basis)
}

// ── Table ──

#[test]
fn table_has_twelve_rows() {
    assert_eq!(all_rules().len(), 12);
}

#[test]
fn predicate_in_se_is_confirmed() {
    assert_eq!(
        outcome(PriorClassification::Predicate, &[SE]),
        (FinalClassification::Predicate, DecisionBasis::Confirmed)
    );
}

#[test]
fn predicate_only_in_general_needs_review() {
    assert_eq!(
        outcome(PriorClassification::Predicate, &[OccurrenceContext::General]),
        (FinalClassification::Uncertain, DecisionBasis::NeedsReview)
    );
}

#[test]
fn reference_in_se_is_reclassified_up() {
    assert_eq!(
        outcome(PriorClassification::Reference, &[COMPARISON]),
        (FinalClassification::Predicate, DecisionBasis::ReclassifiedUp)
    );
}

#[test]
fn reference_in_testing_section_is_confirmed() {
    assert_eq!(
        outcome(PriorClassification::Reference, &[BIO]),
        (FinalClassification::Reference, DecisionBasis::Confirmed)
    );
}

#[test]
fn unknown_prior_is_a_new_finding() {
    assert_eq!(
        outcome(PriorClassification::Unknown, &[SE]),
        (FinalClassification::Predicate, DecisionBasis::NewFinding)
    );
    assert_eq!(
        outcome(PriorClassification::Unknown, &[OccurrenceContext::General]),
        (FinalClassification::Reference, DecisionBasis::NewFinding)
    );
}

#[test]
fn se_dominates_other_evidence() {
    for prior in [
        PriorClassification::Predicate,
        PriorClassification::Reference,
        PriorClassification::Unknown,
    ] {
        assert_eq!(
            outcome(prior, &[SE, OccurrenceContext::General, BIO]),
            outcome(prior, &[SE]),
        );
    }
}

#[test]
fn table_ocr_occurrence_is_not_se_evidence() {
    assert_eq!(
        outcome(PriorClassification::Reference, &[OccurrenceContext::TableOcr]),
        (FinalClassification::Reference, DecisionBasis::Confirmed)
    );
}

#[test]
fn no_evidence_rows() {
    assert_eq!(
        outcome(PriorClassification::Predicate, &[]),
        (FinalClassification::Uncertain, DecisionBasis::NoEvidence)
    );
    assert_eq!(
        outcome(PriorClassification::Reference, &[]),
        (FinalClassification::Reference, DecisionBasis::Confirmed)
    );
    assert_eq!(
        outcome(PriorClassification::Unknown, &[]),
        (FinalClassification::Uncertain, DecisionBasis::NoEvidence)
    );
}

#[test]
fn find_applicable_rule_matches_exact_row() {
    let rule = find_applicable_rule(PriorClassification::Reference, true, false).unwrap();
    assert_eq!(rule.result, FinalClassification::Predicate);
    assert_eq!(rule.basis, DecisionBasis::ReclassifiedUp);
}

// ── Engine ──

#[test]
fn decisions_carry_run_stamp_and_evidence() {
    let run_id = Uuid::new_v4();
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let engine = ReclassificationEngine::for_run(run_id, at);
    let decision = engine.decide(
        "K123456",
        "doc-7",
        PriorClassification::Reference,
        &evidence(&[SE, OccurrenceContext::General]),
    );
    assert_eq!(decision.run_id, run_id);
    assert_eq!(decision.decided_at, at);
    assert_eq!(decision.document_id, "doc-7");
    assert!(decision.found_in_se);
    assert!(decision.found_in_general);
}

#[test]
fn fresh_engines_get_distinct_run_ids() {
    assert_ne!(
        ReclassificationEngine::new().run_id(),
        ReclassificationEngine::new().run_id()
    );
}

// ── Ledger ──

#[test]
fn ledger_keeps_every_run() {
    let mut ledger = DecisionLedger::new();
    let first = ReclassificationEngine::new();
    let second = ReclassificationEngine::new();

    let d1 = first.decide("K123456", "doc-1", PriorClassification::Reference, &evidence(&[BIO]));
    let d2 = second.decide("K123456", "doc-1", PriorClassification::Reference, &evidence(&[SE]));
    ledger.append(first.run_id(), first.decided_at(), vec![d1]).unwrap();
    ledger.append(second.run_id(), second.decided_at(), vec![d2]).unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.history("K123456").len(), 2);
    let latest = ledger.latest("K123456", "doc-1").unwrap();
    assert_eq!(latest.run_id, second.run_id());
    assert_eq!(latest.basis, DecisionBasis::ReclassifiedUp);
    assert_eq!(
        ledger.run(first.run_id()).unwrap().decisions[0].result,
        FinalClassification::Reference
    );
}

#[test]
fn ledger_rejects_duplicate_run() {
    let mut ledger = DecisionLedger::new();
    let engine = ReclassificationEngine::new();
    ledger.append(engine.run_id(), engine.decided_at(), Vec::new()).unwrap();
    let err = ledger
        .append(engine.run_id(), engine.decided_at(), Vec::new())
        .unwrap_err();
    assert_eq!(err, LedgerError::DuplicateRun { run_id: engine.run_id() });
    assert_eq!(ledger.len(), 1);
}

#[test]
fn ledger_rejects_decisions_from_another_run() {
    let mut ledger = DecisionLedger::new();
    let engine = ReclassificationEngine::new();
    let other = ReclassificationEngine::new();
    let stray = other.decide("K123456", "doc-1", PriorClassification::Unknown, &evidence(&[SE]));
    let err = ledger
        .append(engine.run_id(), engine.decided_at(), vec![stray])
        .unwrap_err();
    assert!(matches!(err, LedgerError::RunMismatch { .. }));
    assert!(ledger.is_empty());
}
