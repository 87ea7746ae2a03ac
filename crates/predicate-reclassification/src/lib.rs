//! # predicate-reclassification
//!
//! Reconciles a caller-supplied prior label with where an identifier was
//! actually found. SE-section presence dominates everything else.

pub mod engine;
pub mod ledger;
pub mod rules;

pub use engine::ReclassificationEngine;
pub use ledger::{DecisionLedger, LedgerRun};
pub use rules::{all_rules, find_applicable_rule, ReclassificationRule};
