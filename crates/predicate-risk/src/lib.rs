//! # predicate-risk
//!
//! Risk flags are evaluated independently of confidence scoring. Each rule
//! looks at the identifier itself, the regulatory-history record (when the
//! lookup produced one), and the per-run exclusion list.

pub mod engine;
pub mod rules;

pub use engine::{FlagContext, RiskFlagEngine};
pub use rules::{all_rules, FlagRule};
