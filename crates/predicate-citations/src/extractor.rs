//! Identifier occurrence extraction.

use std::sync::LazyLock;

use regex::Regex;

/// 510(k), PMA (with optional supplement suffix) and De Novo numbers.
static RE_IDENTIFIER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:K[0-9]{6}|P[0-9]{6}(?:/S[0-9]{3})?|DEN[0-9]{6,7})\b").ok()
});

/// One raw pattern match, before section mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMatch {
    /// Upper-cased identifier.
    pub identifier: String,
    pub start: usize,
    pub end: usize,
}

/// Every identifier match in `text`, in order. Repeats are kept.
pub fn extract_identifiers(text: &str) -> Vec<IdentifierMatch> {
    let Some(regex) = LazyLock::force(&RE_IDENTIFIER).as_ref() else {
        tracing::warn!("identifier pattern failed to compile");
        return Vec::new();
    };
    regex
        .find_iter(text)
        .map(|m| IdentifierMatch {
            identifier: m.as_str().to_ascii_uppercase(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
