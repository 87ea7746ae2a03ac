use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Recall classification, I being the most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecallClass {
    #[serde(rename = "I")]
    ClassI,
    #[serde(rename = "II")]
    ClassII,
    #[serde(rename = "III")]
    ClassIII,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    Summary,
    Statement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    #[serde(rename = "510k")]
    Premarket510k,
    DeNovo,
    Pma,
    PmaSupplement,
}

/// Regulatory history of a cited device, as supplied by the lookup collaborator.
/// Every field is optional: absence means "unknown", never "clean".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryHistory {
    pub identifier: String,
    pub decision_date: Option<NaiveDate>,
    pub decision_code: Option<String>,
    pub product_code: Option<String>,
    pub recall_count: Option<u32>,
    pub recall_classes: BTreeSet<RecallClass>,
    pub adverse_event_death_count: Option<u64>,
    pub exclusion_reason: Option<String>,
    /// Regulatory device class (1, 2 or 3).
    pub device_class: Option<u8>,
    pub adverse_event_count: Option<u64>,
    pub summary_type: Option<SummaryType>,
    pub submission_type: Option<SubmissionType>,
    pub withdrawn: Option<bool>,
    pub enforcement_action_count: Option<u32>,
}

impl RegulatoryHistory {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Calendar age of the decision at `as_of`, if the date is known.
    pub fn decision_age_years(&self, as_of: NaiveDate) -> Option<f64> {
        self.decision_date.map(|date| age_in_years(date, as_of))
    }
}

/// Age in calendar years at `as_of`. Whole years count anniversaries, so
/// `date` plus exactly N years is age N.0 regardless of leap days. The
/// remainder is the elapsed share of the current anniversary year. Future
/// dates count as age 0.
pub fn age_in_years(date: NaiveDate, as_of: NaiveDate) -> f64 {
    let Some(whole) = as_of.years_since(date) else {
        return 0.0;
    };
    let anniversary = |years: u32| date.checked_add_months(Months::new(years.saturating_mul(12)));
    let fraction = match (anniversary(whole), anniversary(whole + 1)) {
        (Some(start), Some(next)) if next > start => {
            let elapsed = (as_of - start).num_days().max(0) as f64;
            let span = (next - start).num_days() as f64;
            (elapsed / span).min(1.0)
        }
        _ => 0.0,
    };
    f64::from(whole) + fraction
}

/// Outcome of the regulatory-history lookup for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    NotFound,
    Unavailable,
}
