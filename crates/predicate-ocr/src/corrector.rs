//! Bounded OCR correction of a single heading-length line.
//!
//! Two repairs, applied in order:
//! 1. glyph substitution: look-alike digits/symbols touching letters inside
//!    word-like tokens become letters, at most `max_substitutions` per line;
//! 2. space removal: if the heading body is exactly two tokens, joining them
//!    is kept only when the caller's matcher accepts the joined line and did
//!    not accept the line before.

use predicate_core::config::OcrConfig;
use predicate_core::models::Correction;

use crate::glyphs::{is_alpha_dominant, lookalike, suspicious_glyphs, tokens};

/// Minimum letters for a token to be eligible for glyph substitution.
const MIN_WORD_LETTERS: usize = 2;

/// Result of correcting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedLine {
    pub text: String,
    /// Repairs in the order they were applied. Empty if nothing changed.
    pub corrections: Vec<Correction>,
}

impl CorrectedLine {
    pub fn is_changed(&self) -> bool {
        !self.corrections.is_empty()
    }

    /// Corrections rendered as `"8→B"` strings.
    pub fn rendered(&self) -> Vec<String> {
        self.corrections.iter().map(ToString::to_string).collect()
    }
}

/// Applies the fixed substitution table to heading candidates.
#[derive(Debug, Clone)]
pub struct OcrCorrector {
    max_substitutions: usize,
}

impl Default for OcrCorrector {
    fn default() -> Self {
        Self::from_config(&OcrConfig::default())
    }
}

impl OcrCorrector {
    pub fn new(max_substitutions: usize) -> Self {
        Self { max_substitutions }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.max_substitutions_per_line)
    }

    pub fn max_substitutions(&self) -> usize {
        self.max_substitutions
    }

    /// Correct `line`. `matches` reports whether a candidate line is a
    /// recognizable section heading; it gates the space-removal repair.
    pub fn correct(&self, line: &str, matches: &dyn Fn(&str) -> bool) -> CorrectedLine {
        let (mut text, mut corrections) = self.substitute_glyphs(line);

        if let Some((joined, correction)) = join_split_heading(&text) {
            if !matches(&text) && matches(&joined) {
                tracing::debug!(line, correction = %correction, "re-joined split heading");
                text = joined;
                corrections.push(correction);
            }
        }

        CorrectedLine { text, corrections }
    }

    fn substitute_glyphs(&self, line: &str) -> (String, Vec<Correction>) {
        let mut out: Vec<char> = Vec::with_capacity(line.len());
        let mut corrections = Vec::new();
        let mut targets: Vec<(usize, char)> = Vec::new();

        for (token_offset, token) in tokens(line) {
            if !is_alpha_dominant(token, MIN_WORD_LETTERS) {
                continue;
            }
            for (offset, glyph) in suspicious_glyphs(token) {
                targets.push((token_offset + offset, glyph));
            }
        }
        targets.truncate(self.max_substitutions);

        let mut previous: Option<char> = None;
        for (offset, c) in line.char_indices() {
            let replacement = targets
                .iter()
                .find(|(target, _)| *target == offset)
                .and_then(|(_, glyph)| lookalike(*glyph));
            let emitted = match replacement {
                Some(letter) => {
                    let letter = if previous.is_some_and(char::is_lowercase) {
                        letter.to_ascii_lowercase()
                    } else {
                        letter
                    };
                    corrections.push(Correction::glyph(c, letter, offset));
                    letter
                }
                None => c,
            };
            out.push(emitted);
            previous = Some(emitted);
        }

        (out.into_iter().collect(), corrections)
    }
}

/// Numbering tokens such as `7.`, `7.2`, `VII.` or `A)`.
fn is_numbering(token: &str) -> bool {
    let body = token.trim_end_matches(['.', ')']);
    if body.is_empty() {
        return false;
    }
    let roman_or_digits = body
        .split('.')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit() || "ivxlcIVXLC".contains(c)));
    let letter_item = body.len() == 1
        && body.chars().all(|c| c.is_ascii_alphabetic())
        && token.len() == 2;
    roman_or_digits || letter_item
}

/// If the heading body (after optional numbering) is two tokens, the line
/// with the space between them removed.
fn join_split_heading(line: &str) -> Option<(String, Correction)> {
    let mut parts: Vec<(usize, &str)> = tokens(line).collect();
    if parts.first().is_some_and(|(_, t)| is_numbering(t)) && parts.len() == 3 {
        parts.remove(0);
    }
    let [(first_offset, first), (second_offset, second)] = parts.as_slice() else {
        return None;
    };
    let first_end = first_offset + first.len();
    let before = &line[*first_offset..second_offset + second.len()];
    let after = format!("{first}{second}");
    let joined = format!("{}{}", &line[..first_end], &line[*second_offset..]);
    Some((joined, Correction::space_removal(before, after, first_end)))
}
