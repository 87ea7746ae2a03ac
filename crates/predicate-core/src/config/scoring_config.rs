//! Confidence scoring policy expressed as point tables.
//!
//! Every factor is a lookup into data defined here so that the policy can be
//! audited, overridden from TOML, and unit-tested without touching scorer code.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ScoreLabel;

/// Scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub policy: ScoringPolicy,
    /// Decision codes treated as conditional substantial equivalence.
    pub conditional_decision_codes: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            conditional_decision_codes: defaults::DEFAULT_CONDITIONAL_DECISION_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ScoringConfig {
    pub fn is_conditional_code(&self, code: &str) -> bool {
        self.conditional_decision_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code.trim()))
    }
}

/// Points for the best context an identifier was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContextPoints {
    pub substantial_equivalence: u32,
    pub testing_or_clinical: u32,
    pub table_ocr: u32,
    pub general: u32,
}

impl Default for SectionContextPoints {
    fn default() -> Self {
        Self {
            substantial_equivalence: 40,
            testing_or_clinical: 25,
            table_ocr: 15,
            general: 10,
        }
    }
}

impl SectionContextPoints {
    pub fn max(&self) -> u32 {
        self.substantial_equivalence
            .max(self.testing_or_clinical)
            .max(self.table_ocr)
            .max(self.general)
    }
}

/// `value >= threshold` awards `points`. Tables are scanned top-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub threshold: f64,
    pub points: u32,
}

/// Weighted citation sum to points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationPoints {
    /// Sorted by descending threshold.
    pub breakpoints: Vec<Breakpoint>,
    /// Awarded when no breakpoint is reached.
    pub floor: u32,
}

impl Default for CitationPoints {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint { threshold: 5.0, points: 20 },
                Breakpoint { threshold: 3.0, points: 15 },
                Breakpoint { threshold: 2.0, points: 10 },
            ],
            floor: 5,
        }
    }
}

impl CitationPoints {
    pub fn max(&self) -> u32 {
        self.breakpoints
            .iter()
            .map(|b| b.points)
            .fold(self.floor, u32::max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCodePoints {
    pub matched: u32,
    pub unknown: u32,
    pub mismatched: u32,
}

impl Default for ProductCodePoints {
    fn default() -> Self {
        Self {
            matched: 15,
            unknown: 8,
            mismatched: 0,
        }
    }
}

impl ProductCodePoints {
    pub fn max(&self) -> u32 {
        self.matched.max(self.unknown).max(self.mismatched)
    }
}

/// Age band `[previous band's limit, under_years)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub under_years: f64,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecencyPoints {
    /// Sorted by ascending `under_years`.
    pub bands: Vec<AgeBand>,
    /// Older than the last band.
    pub beyond: u32,
    /// Decision date not known.
    pub unknown: u32,
}

impl Default for RecencyPoints {
    fn default() -> Self {
        Self {
            bands: vec![
                AgeBand { under_years: 5.0, points: 15 },
                AgeBand { under_years: 10.0, points: 10 },
                AgeBand { under_years: 15.0, points: 5 },
            ],
            beyond: 2,
            unknown: 5,
        }
    }
}

impl RecencyPoints {
    pub fn max(&self) -> u32 {
        self.bands
            .iter()
            .map(|b| b.points)
            .fold(self.beyond.max(self.unknown), u32::max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryPoints {
    pub clean: u32,
    pub conditional: u32,
    pub adverse: u32,
    pub unknown: u32,
}

impl Default for HistoryPoints {
    fn default() -> Self {
        Self {
            clean: 10,
            conditional: 5,
            adverse: 0,
            unknown: 5,
        }
    }
}

impl HistoryPoints {
    pub fn max(&self) -> u32 {
        self.clean
            .max(self.conditional)
            .max(self.adverse)
            .max(self.unknown)
    }
}

/// `total >= min_total` earns `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelBreakpoint {
    pub min_total: u32,
    pub label: ScoreLabel,
}

/// The complete five-factor point policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub section_context: SectionContextPoints,
    pub citation_frequency: CitationPoints,
    pub product_code: ProductCodePoints,
    pub recency: RecencyPoints,
    pub regulatory_history: HistoryPoints,
    /// Sorted by descending `min_total`; below the last is `Reject`.
    pub labels: Vec<LabelBreakpoint>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            section_context: SectionContextPoints::default(),
            citation_frequency: CitationPoints::default(),
            product_code: ProductCodePoints::default(),
            recency: RecencyPoints::default(),
            regulatory_history: HistoryPoints::default(),
            labels: vec![
                LabelBreakpoint { min_total: 80, label: ScoreLabel::Strong },
                LabelBreakpoint { min_total: 60, label: ScoreLabel::Moderate },
                LabelBreakpoint { min_total: 40, label: ScoreLabel::Weak },
                LabelBreakpoint { min_total: 20, label: ScoreLabel::Poor },
            ],
        }
    }
}

impl ScoringPolicy {
    /// Highest total the policy can award.
    pub fn max_total(&self) -> u32 {
        self.section_context.max()
            + self.citation_frequency.max()
            + self.product_code.max()
            + self.recency.max()
            + self.regulatory_history.max()
    }

    /// Table ordering problems, as `(field, message)`.
    pub fn ordering_problem(&self) -> Option<(&'static str, &'static str)> {
        let bp = &self.citation_frequency.breakpoints;
        if bp.windows(2).any(|w| w[0].threshold <= w[1].threshold) {
            return Some((
                "scoring.policy.citation_frequency.breakpoints",
                "thresholds must be strictly descending",
            ));
        }
        if bp.iter().any(|b| !b.threshold.is_finite() || b.threshold < 0.0) {
            return Some((
                "scoring.policy.citation_frequency.breakpoints",
                "thresholds must be finite and non-negative",
            ));
        }
        let bands = &self.recency.bands;
        if bands.windows(2).any(|w| w[0].under_years >= w[1].under_years) {
            return Some((
                "scoring.policy.recency.bands",
                "bands must be strictly ascending",
            ));
        }
        if bands.iter().any(|b| !b.under_years.is_finite() || b.under_years <= 0.0) {
            return Some((
                "scoring.policy.recency.bands",
                "band limits must be finite and positive",
            ));
        }
        if self.labels.windows(2).any(|w| w[0].min_total <= w[1].min_total) {
            return Some((
                "scoring.policy.labels",
                "breakpoints must be strictly descending",
            ));
        }
        None
    }
}
