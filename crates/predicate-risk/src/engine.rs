use chrono::NaiveDate;

use predicate_core::config::{PredicateConfig, RiskConfig};
use predicate_core::models::{age_in_years, ExclusionList, IdentifierKind, RegulatoryHistory, RiskFlag};

use crate::rules::{all_rules, FlagRule};

/// Everything a flag rule may look at for one identifier.
pub struct FlagContext<'a> {
    pub identifier: &'a str,
    pub kind: Option<IdentifierKind>,
    /// `None` when the lookup had no record or was unavailable.
    pub record: Option<&'a RegulatoryHistory>,
    /// Product codes of the documents citing this identifier.
    pub citing_product_codes: &'a [&'a str],
    pub exclusions: &'a ExclusionList,
    pub as_of: NaiveDate,
    pub config: &'a RiskConfig,
    pub conditional_codes: &'a [String],
}

impl FlagContext<'_> {
    /// Calendar age of `date` at `as_of`.
    pub fn age_years(&self, date: NaiveDate) -> f64 {
        age_in_years(date, self.as_of)
    }
}

/// Evaluates every flag rule for an identifier.
pub struct RiskFlagEngine {
    config: RiskConfig,
    conditional_codes: Vec<String>,
    rules: Vec<FlagRule>,
}

impl Default for RiskFlagEngine {
    fn default() -> Self {
        Self::from_config(&PredicateConfig::default())
    }
}

impl RiskFlagEngine {
    pub fn new(config: RiskConfig, conditional_codes: Vec<String>) -> Self {
        Self {
            config,
            conditional_codes,
            rules: all_rules(),
        }
    }

    pub fn from_config(config: &PredicateConfig) -> Self {
        Self::new(
            config.risk.clone(),
            config.scoring.conditional_decision_codes.clone(),
        )
    }

    /// Flags for `identifier`, in rule order. At most one flag per kind.
    pub fn evaluate(
        &self,
        identifier: &str,
        record: Option<&RegulatoryHistory>,
        citing_product_codes: &[&str],
        exclusions: &ExclusionList,
        as_of: NaiveDate,
    ) -> Vec<RiskFlag> {
        let ctx = FlagContext {
            identifier,
            kind: IdentifierKind::of(identifier),
            record,
            citing_product_codes,
            exclusions,
            as_of,
            config: &self.config,
            conditional_codes: &self.conditional_codes,
        };
        let flags: Vec<RiskFlag> = self
            .rules
            .iter()
            .filter_map(|rule| {
                (rule.evaluate)(&ctx).map(|evidence| RiskFlag::new(rule.kind, rule.severity, evidence))
            })
            .collect();
        if !flags.is_empty() {
            tracing::debug!(identifier, flags = flags.len(), "risk flags raised");
        }
        flags
    }
}
