use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of structural section families in a submission document.
///
/// Declaration order is the tie-break order when two families match the same
/// heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    CoverLetter,
    ExecutiveSummary,
    TableOfContents,
    TruthfulAccurateStatement,
    #[serde(rename = "summary_510k")]
    Summary510k,
    DeviceDescription,
    IndicationsForUse,
    SubstantialEquivalence,
    PredicateComparison,
    TechnologicalCharacteristics,
    Biocompatibility,
    Sterilization,
    ShelfLife,
    Reprocessing,
    SoftwareValidation,
    Cybersecurity,
    ElectricalSafety,
    ElectromagneticCompatibility,
    PerformanceTestingBench,
    NonClinicalTesting,
    AnimalStudies,
    ClinicalStudies,
    HumanFactors,
    MriSafety,
    RiskAnalysis,
    Labeling,
    StandardsConformance,
    Conclusion,
}

impl SectionType {
    /// All 28 families in declaration order.
    pub const ALL: [SectionType; 28] = [
        Self::CoverLetter,
        Self::ExecutiveSummary,
        Self::TableOfContents,
        Self::TruthfulAccurateStatement,
        Self::Summary510k,
        Self::DeviceDescription,
        Self::IndicationsForUse,
        Self::SubstantialEquivalence,
        Self::PredicateComparison,
        Self::TechnologicalCharacteristics,
        Self::Biocompatibility,
        Self::Sterilization,
        Self::ShelfLife,
        Self::Reprocessing,
        Self::SoftwareValidation,
        Self::Cybersecurity,
        Self::ElectricalSafety,
        Self::ElectromagneticCompatibility,
        Self::PerformanceTestingBench,
        Self::NonClinicalTesting,
        Self::AnimalStudies,
        Self::ClinicalStudies,
        Self::HumanFactors,
        Self::MriSafety,
        Self::RiskAnalysis,
        Self::Labeling,
        Self::StandardsConformance,
        Self::Conclusion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CoverLetter => "cover_letter",
            Self::ExecutiveSummary => "executive_summary",
            Self::TableOfContents => "table_of_contents",
            Self::TruthfulAccurateStatement => "truthful_accurate_statement",
            Self::Summary510k => "summary_510k",
            Self::DeviceDescription => "device_description",
            Self::IndicationsForUse => "indications_for_use",
            Self::SubstantialEquivalence => "substantial_equivalence",
            Self::PredicateComparison => "predicate_comparison",
            Self::TechnologicalCharacteristics => "technological_characteristics",
            Self::Biocompatibility => "biocompatibility",
            Self::Sterilization => "sterilization",
            Self::ShelfLife => "shelf_life",
            Self::Reprocessing => "reprocessing",
            Self::SoftwareValidation => "software_validation",
            Self::Cybersecurity => "cybersecurity",
            Self::ElectricalSafety => "electrical_safety",
            Self::ElectromagneticCompatibility => "electromagnetic_compatibility",
            Self::PerformanceTestingBench => "performance_testing_bench",
            Self::NonClinicalTesting => "non_clinical_testing",
            Self::AnimalStudies => "animal_studies",
            Self::ClinicalStudies => "clinical_studies",
            Self::HumanFactors => "human_factors",
            Self::MriSafety => "mri_safety",
            Self::RiskAnalysis => "risk_analysis",
            Self::Labeling => "labeling",
            Self::StandardsConformance => "standards_conformance",
            Self::Conclusion => "conclusion",
        }
    }

    /// Sections that compare the subject device against a cleared device.
    pub fn is_substantial_equivalence(self) -> bool {
        matches!(self, Self::SubstantialEquivalence | Self::PredicateComparison)
    }

    /// Testing, safety, and study sections.
    pub fn is_testing_or_clinical(self) -> bool {
        matches!(
            self,
            Self::Biocompatibility
                | Self::Sterilization
                | Self::ShelfLife
                | Self::Reprocessing
                | Self::SoftwareValidation
                | Self::Cybersecurity
                | Self::ElectricalSafety
                | Self::ElectromagneticCompatibility
                | Self::PerformanceTestingBench
                | Self::NonClinicalTesting
                | Self::AnimalStudies
                | Self::ClinicalStudies
                | Self::HumanFactors
                | Self::MriSafety
        )
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which detection pass produced a heading match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DetectionTier {
    /// Direct pattern match against the raw text.
    Direct,
    /// Match found only after OCR correction of the heading line.
    OcrCorrected,
}

impl DetectionTier {
    pub fn number(self) -> u8 {
        match self {
            Self::Direct => 1,
            Self::OcrCorrected => 2,
        }
    }
}

impl From<DetectionTier> for u8 {
    fn from(tier: DetectionTier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for DetectionTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Direct),
            2 => Ok(Self::OcrCorrected),
            other => Err(format!("unknown detection tier {other}")),
        }
    }
}

/// Kind of OCR repair applied to a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    /// A digit or symbol replaced by its look-alike letter.
    GlyphSubstitution,
    /// One internal space removed to re-join a split word.
    SpaceRemoval,
}

/// A single OCR repair, positioned by byte offset within the heading line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correction {
    pub kind: CorrectionKind,
    pub from: String,
    pub to: String,
    pub offset: usize,
}

impl Correction {
    pub fn glyph(from: char, to: char, offset: usize) -> Self {
        Self {
            kind: CorrectionKind::GlyphSubstitution,
            from: from.to_string(),
            to: to.to_string(),
            offset,
        }
    }

    pub fn space_removal(before: impl Into<String>, after: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: CorrectionKind::SpaceRemoval,
            from: before.into(),
            to: after.into(),
            offset,
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// A detected structural region of one document.
///
/// `[start, end)` are byte offsets; `start` is the heading line start and
/// `heading_end` the end of the heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub section_type: SectionType,
    pub start: usize,
    pub end: usize,
    pub heading_end: usize,
    /// Heading text as it appears in the document (uncorrected).
    pub heading: String,
    pub tier: DetectionTier,
    /// Repairs applied to reach a tier-2 match; empty for tier 1.
    #[serde(default)]
    pub corrections: Vec<Correction>,
}

impl SectionSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn overlaps(&self, other: &SectionSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
