use serde::{Deserialize, Serialize};

/// Submission family encoded in an identifier's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// `K` + 6 digits.
    Premarket510k,
    /// `P` + 6 digits.
    Pma,
    /// `P` + 6 digits + `/S` + 3 digits.
    PmaSupplement,
    /// `DEN` + 6 or 7 digits.
    DeNovo,
}

impl IdentifierKind {
    /// Kind of a normalized identifier, or `None` if it is not well-formed.
    pub fn of(identifier: &str) -> Option<Self> {
        let id = identifier.trim().to_ascii_uppercase();
        let digits = |s: &str, lens: &[usize]| {
            lens.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
        };
        if let Some(rest) = id.strip_prefix("DEN") {
            return digits(rest, &[6, 7]).then_some(Self::DeNovo);
        }
        if let Some(rest) = id.strip_prefix('K') {
            return digits(rest, &[6]).then_some(Self::Premarket510k);
        }
        if let Some(rest) = id.strip_prefix('P') {
            return match rest.split_once("/S") {
                Some((base, supplement)) => (digits(base, &[6]) && digits(supplement, &[3]))
                    .then_some(Self::PmaSupplement),
                None => digits(rest, &[6]).then_some(Self::Pma),
            };
        }
        None
    }

    pub fn is_pma(self) -> bool {
        matches!(self, Self::Pma | Self::PmaSupplement)
    }
}
