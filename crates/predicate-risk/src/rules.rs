//! Flag rules as data: one entry per flag kind, evaluated in order.

use predicate_core::models::{
    FlagKind, IdentifierKind, RecallClass, Severity, SubmissionType, SummaryType,
};

use crate::engine::FlagContext;

/// A single flag rule. `evaluate` returns the evidence text when the flag applies.
pub struct FlagRule {
    pub kind: FlagKind,
    pub severity: Severity,
    pub evaluate: fn(&FlagContext<'_>) -> Option<String>,
}

/// All flag rules, one per kind.
pub fn all_rules() -> Vec<FlagRule> {
    vec![
        FlagRule { kind: FlagKind::Recalled, severity: Severity::High, evaluate: recalled },
        FlagRule {
            kind: FlagKind::RecalledClassI,
            severity: Severity::Critical,
            evaluate: recalled_class_i,
        },
        FlagRule { kind: FlagKind::PmaOnly, severity: Severity::High, evaluate: pma_only },
        FlagRule { kind: FlagKind::ClassIii, severity: Severity::High, evaluate: class_iii },
        FlagRule { kind: FlagKind::Old, severity: Severity::Low, evaluate: old },
        FlagRule { kind: FlagKind::HighMaude, severity: Severity::Medium, evaluate: high_maude },
        FlagRule {
            kind: FlagKind::DeathEvents,
            severity: Severity::Critical,
            evaluate: death_events,
        },
        FlagRule { kind: FlagKind::Excluded, severity: Severity::User, evaluate: excluded },
        FlagRule {
            kind: FlagKind::StatementOnly,
            severity: Severity::Low,
            evaluate: statement_only,
        },
        FlagRule { kind: FlagKind::Supplement, severity: Severity::Medium, evaluate: supplement },
        FlagRule {
            kind: FlagKind::ProductCodeMismatch,
            severity: Severity::Medium,
            evaluate: product_code_mismatch,
        },
        FlagRule {
            kind: FlagKind::ConditionalSe,
            severity: Severity::Medium,
            evaluate: conditional_se,
        },
        FlagRule { kind: FlagKind::DeNovo, severity: Severity::Low, evaluate: de_novo },
        FlagRule { kind: FlagKind::Withdrawn, severity: Severity::Critical, evaluate: withdrawn },
        FlagRule {
            kind: FlagKind::EnforcementAction,
            severity: Severity::High,
            evaluate: enforcement_action,
        },
    ]
}

fn recalled(ctx: &FlagContext<'_>) -> Option<String> {
    let record = ctx.record?;
    match record.recall_count {
        Some(n) if n > 0 => Some(format!("{n} recall(s) on record")),
        _ if !record.recall_classes.is_empty() => Some("recall classes on record".to_string()),
        _ => None,
    }
}

fn recalled_class_i(ctx: &FlagContext<'_>) -> Option<String> {
    ctx.record?
        .recall_classes
        .contains(&RecallClass::ClassI)
        .then(|| "class I recall on record".to_string())
}

fn pma_only(ctx: &FlagContext<'_>) -> Option<String> {
    if ctx.kind.is_some_and(IdentifierKind::is_pma) {
        return Some(format!("{} is a PMA number", ctx.identifier));
    }
    let submission = ctx.record?.submission_type?;
    matches!(submission, SubmissionType::Pma | SubmissionType::PmaSupplement)
        .then(|| "record lists a PMA submission".to_string())
}

fn class_iii(ctx: &FlagContext<'_>) -> Option<String> {
    (ctx.record?.device_class? == 3).then(|| "device class III".to_string())
}

fn old(ctx: &FlagContext<'_>) -> Option<String> {
    let date = ctx.record?.decision_date?;
    let years = ctx.age_years(date);
    (years > f64::from(ctx.config.old_device_years))
        .then(|| format!("decision dated {date}, {years:.1} years old"))
}

fn high_maude(ctx: &FlagContext<'_>) -> Option<String> {
    let events = ctx.record?.adverse_event_count?;
    (events >= ctx.config.high_maude_events).then(|| format!("{events} adverse event reports"))
}

fn death_events(ctx: &FlagContext<'_>) -> Option<String> {
    let deaths = ctx.record?.adverse_event_death_count?;
    (deaths > 0).then(|| format!("{deaths} death event(s) reported"))
}

fn excluded(ctx: &FlagContext<'_>) -> Option<String> {
    if let Some(reason) = ctx.exclusions.reason_for(ctx.identifier) {
        return Some(format!("exclusion list: {reason}"));
    }
    ctx.record?
        .exclusion_reason
        .as_deref()
        .map(|reason| format!("record exclusion: {reason}"))
}

fn statement_only(ctx: &FlagContext<'_>) -> Option<String> {
    (ctx.record?.summary_type? == SummaryType::Statement)
        .then(|| "510(k) statement only, no public summary".to_string())
}

fn supplement(ctx: &FlagContext<'_>) -> Option<String> {
    if ctx.kind == Some(IdentifierKind::PmaSupplement) {
        return Some(format!("{} is a PMA supplement", ctx.identifier));
    }
    (ctx.record?.submission_type? == SubmissionType::PmaSupplement)
        .then(|| "record lists a PMA supplement".to_string())
}

fn product_code_mismatch(ctx: &FlagContext<'_>) -> Option<String> {
    let cited = ctx.record?.product_code.as_deref()?.trim();
    if cited.is_empty() {
        return None;
    }
    let mismatched: Vec<&str> = ctx
        .citing_product_codes
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty() && !code.eq_ignore_ascii_case(cited))
        .collect();
    (!mismatched.is_empty())
        .then(|| format!("cited {cited}, citing {}", mismatched.join(", ")))
}

fn conditional_se(ctx: &FlagContext<'_>) -> Option<String> {
    let code = ctx.record?.decision_code.as_deref()?.trim();
    ctx.conditional_codes
        .iter()
        .any(|c| c.eq_ignore_ascii_case(code))
        .then(|| format!("decision code {code}"))
}

fn de_novo(ctx: &FlagContext<'_>) -> Option<String> {
    if ctx.kind == Some(IdentifierKind::DeNovo) {
        return Some(format!("{} is a De Novo number", ctx.identifier));
    }
    (ctx.record?.submission_type? == SubmissionType::DeNovo)
        .then(|| "record lists a De Novo request".to_string())
}

fn withdrawn(ctx: &FlagContext<'_>) -> Option<String> {
    ctx.record?
        .withdrawn?
        .then(|| "clearance withdrawn".to_string())
}

fn enforcement_action(ctx: &FlagContext<'_>) -> Option<String> {
    let actions = ctx.record?.enforcement_action_count?;
    (actions > 0).then(|| format!("{actions} enforcement action(s)"))
}
