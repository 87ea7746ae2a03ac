use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of risk indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagKind {
    Recalled,
    #[serde(rename = "RECALLED_CLASS_I")]
    RecalledClassI,
    PmaOnly,
    #[serde(rename = "CLASS_III")]
    ClassIii,
    Old,
    HighMaude,
    DeathEvents,
    Excluded,
    StatementOnly,
    Supplement,
    ProductCodeMismatch,
    ConditionalSe,
    DeNovo,
    Withdrawn,
    EnforcementAction,
}

impl FlagKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Recalled => "RECALLED",
            Self::RecalledClassI => "RECALLED_CLASS_I",
            Self::PmaOnly => "PMA_ONLY",
            Self::ClassIii => "CLASS_III",
            Self::Old => "OLD",
            Self::HighMaude => "HIGH_MAUDE",
            Self::DeathEvents => "DEATH_EVENTS",
            Self::Excluded => "EXCLUDED",
            Self::StatementOnly => "STATEMENT_ONLY",
            Self::Supplement => "SUPPLEMENT",
            Self::ProductCodeMismatch => "PRODUCT_CODE_MISMATCH",
            Self::ConditionalSe => "CONDITIONAL_SE",
            Self::DeNovo => "DE_NOVO",
            Self::Withdrawn => "WITHDRAWN",
            Self::EnforcementAction => "ENFORCEMENT_ACTION",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flag severity. `User` marks flags raised by user-maintained data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    User,
}

/// A risk indicator attached to an identifier. Never affects scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub kind: FlagKind,
    pub severity: Severity,
    pub evidence: String,
}

impl RiskFlag {
    pub fn new(kind: FlagKind, severity: Severity, evidence: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            evidence: evidence.into(),
        }
    }

    /// Consumers must surface these regardless of the confidence score.
    pub fn is_prominent(&self) -> bool {
        matches!(self.severity, Severity::High | Severity::Critical)
    }
}
