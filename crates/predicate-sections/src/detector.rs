//! Two-tier section detector.
//!
//! Tier 1 runs every family directly against the full text. Tier 2 runs only
//! when OCR quality is not HIGH: each unmatched heading-length line is passed
//! through the OCR corrector and re-classified. Heading matches are merged by
//! position (tier 1 wins any overlap) and turned into spans that run to the
//! next heading, with the substantial-equivalence span capped at a fixed
//! character window past its heading.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use predicate_core::config::{OcrConfig, PredicateConfig, SectionConfig};
use predicate_core::models::{
    Correction, DetectionTier, OcrQualityReport, SectionSpan, SectionType,
};
use predicate_ocr::OcrCorrector;

use crate::patterns::{all_families, SectionFamily};

/// A heading line recognized by one of the tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeadingMatch {
    section_type: SectionType,
    start: usize,
    heading_end: usize,
    heading: String,
    tier: DetectionTier,
    corrections: Vec<Correction>,
}

impl HeadingMatch {
    fn overlaps(&self, other: &HeadingMatch) -> bool {
        self.start < other.heading_end && other.start < self.heading_end
    }
}

/// Counters describing one detection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    pub tier1_matches: usize,
    /// Whether the tier-2 pass ran at all.
    pub tier2_invoked: bool,
    /// Lines handed to the OCR corrector.
    pub tier2_candidates: usize,
    pub tier2_matches: usize,
    /// Tier-2 matches discarded because a tier-1 match covered them.
    pub tier2_discarded: usize,
}

/// Spans plus run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub spans: Vec<SectionSpan>,
    pub stats: DetectionStats,
}

/// Detects structural sections in document text.
pub struct SectionDetector {
    config: SectionConfig,
    corrector: OcrCorrector,
    families: Vec<SectionFamily>,
}

impl Default for SectionDetector {
    fn default() -> Self {
        Self::new(SectionConfig::default(), &OcrConfig::default())
    }
}

impl SectionDetector {
    pub fn new(config: SectionConfig, ocr: &OcrConfig) -> Self {
        Self {
            config,
            corrector: OcrCorrector::from_config(ocr),
            families: all_families(),
        }
    }

    pub fn from_config(config: &PredicateConfig) -> Self {
        Self::new(config.sections.clone(), &config.ocr)
    }

    /// Detected spans, ordered by position and never overlapping.
    pub fn detect(&self, text: &str, quality: &OcrQualityReport) -> Vec<SectionSpan> {
        self.detect_detailed(text, quality).spans
    }

    pub fn detect_detailed(&self, text: &str, quality: &OcrQualityReport) -> Detection {
        let mut stats = DetectionStats::default();

        let direct = self.direct_matches(text);
        stats.tier1_matches = direct.len();

        let corrected = if quality.needs_correction() {
            stats.tier2_invoked = true;
            self.corrected_matches(text, &direct, &mut stats)
        } else {
            Vec::new()
        };

        let headings = merge(direct, corrected, &mut stats);
        let spans = self.to_spans(text, headings);

        tracing::debug!(
            tier1 = stats.tier1_matches,
            tier2 = stats.tier2_matches,
            spans = spans.len(),
            "section detection complete"
        );
        Detection { spans, stats }
    }

    /// First family (in declaration order) whose pattern accepts `line` as a heading.
    pub fn classify_line(&self, line: &str) -> Option<SectionType> {
        if !self.is_heading_line(line) {
            return None;
        }
        self.families
            .iter()
            .find(|family| {
                LazyLock::force(family.regex)
                    .as_ref()
                    .is_some_and(|regex| regex.is_match(line))
            })
            .map(|family| family.section_type)
    }

    /// Tier 1: every family against the full text, first family per line wins.
    fn direct_matches(&self, text: &str) -> Vec<HeadingMatch> {
        let mut by_line: BTreeMap<usize, HeadingMatch> = BTreeMap::new();
        for family in &self.families {
            let Some(regex) = LazyLock::force(family.regex).as_ref() else {
                continue;
            };
            for m in regex.find_iter(text) {
                if by_line.contains_key(&m.start()) || !self.is_heading_line(m.as_str()) {
                    continue;
                }
                by_line.insert(
                    m.start(),
                    HeadingMatch {
                        section_type: family.section_type,
                        start: m.start(),
                        heading_end: m.end(),
                        heading: m.as_str().trim().to_string(),
                        tier: DetectionTier::Direct,
                        corrections: Vec::new(),
                    },
                );
            }
        }
        by_line.into_values().collect()
    }

    /// Tier 2: correct unmatched heading-length lines and re-classify them.
    fn corrected_matches(
        &self,
        text: &str,
        direct: &[HeadingMatch],
        stats: &mut DetectionStats,
    ) -> Vec<HeadingMatch> {
        let matcher = |candidate: &str| self.classify_line(candidate).is_some();
        let mut found = Vec::new();

        for (start, line) in lines_with_offsets(text) {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.chars().count() > self.config.max_heading_chars {
                continue;
            }
            let end = start + line.len();
            if direct.iter().any(|d| d.start < end && start < d.heading_end) {
                continue;
            }

            stats.tier2_candidates += 1;
            let corrected = self.corrector.correct(line, &matcher);
            if !corrected.is_changed() {
                continue;
            }
            if let Some(section_type) = self.classify_line(&corrected.text) {
                tracing::debug!(
                    offset = start,
                    section = %section_type,
                    corrections = ?corrected.rendered(),
                    "tier-2 heading match after OCR correction"
                );
                found.push(HeadingMatch {
                    section_type,
                    start,
                    heading_end: end,
                    heading: trimmed.to_string(),
                    tier: DetectionTier::OcrCorrected,
                    corrections: corrected.corrections,
                });
            }
        }
        stats.tier2_matches = found.len();
        found
    }

    fn is_heading_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && trimmed.chars().count() <= self.config.max_heading_chars
            && !trimmed.ends_with(['.', ',', ';'])
            && !trimmed.contains("....")
    }

    fn to_spans(&self, text: &str, headings: Vec<HeadingMatch>) -> Vec<SectionSpan> {
        let next_starts: Vec<usize> = headings
            .iter()
            .skip(1)
            .map(|h| h.start)
            .chain(std::iter::once(text.len()))
            .collect();

        headings
            .into_iter()
            .zip(next_starts)
            .map(|(heading, next_start)| {
                let mut end = next_start;
                if heading.section_type == SectionType::SubstantialEquivalence {
                    end = end.min(window_end(text, heading.heading_end, self.config.se_window_chars));
                }
                SectionSpan {
                    section_type: heading.section_type,
                    start: heading.start,
                    end,
                    heading_end: heading.heading_end,
                    heading: heading.heading,
                    tier: heading.tier,
                    corrections: heading.corrections,
                }
            })
            .collect()
    }
}

/// Sort by position; drop tier-2 headings overlapping any tier-1 heading.
fn merge(
    direct: Vec<HeadingMatch>,
    corrected: Vec<HeadingMatch>,
    stats: &mut DetectionStats,
) -> Vec<HeadingMatch> {
    let before = corrected.len();
    let kept: Vec<HeadingMatch> = corrected
        .into_iter()
        .filter(|c| !direct.iter().any(|d| d.overlaps(c)))
        .collect();
    stats.tier2_discarded = before - kept.len();
    stats.tier2_matches = kept.len();

    let mut all = direct;
    all.extend(kept);
    all.sort_by(|a, b| a.start.cmp(&b.start).then(a.tier.cmp(&b.tier)));
    all.dedup_by(|later, earlier| later.start < earlier.heading_end);
    all
}

/// Byte offset `chars` characters past `from`, or the end of `text`.
fn window_end(text: &str, from: usize, chars: usize) -> usize {
    text.get(from..)
        .and_then(|rest| rest.char_indices().nth(chars))
        .map_or(text.len(), |(i, _)| from + i)
}

/// Lines (without the trailing `\n`) paired with their byte offsets.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line)
    })
}
