//! Heading pattern families, one compiled regex per section type.
//!
//! Every family matches a whole line: optional `Section`/`Part` keyword,
//! optional numbering (`7.`, `7.2`, `VII.`, `A)`), one of the family's
//! wording variants, then the rest of the line. A `:` or `|` after the
//! variant may only close the line: `Sterilization: EO` is a comparison-table
//! row, not a heading.

use std::sync::LazyLock;

use predicate_core::models::SectionType;
use regex::Regex;

/// A compiled heading pattern for one section type.
pub struct SectionFamily {
    pub section_type: SectionType,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! section_pattern {
    ($name:ident, $variants:literal) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            Regex::new(concat!(
                r"(?im)^[ \t]*(?:(?:section|part)[ \t]+)?",
                r"(?:[0-9ivxlc]+(?:\.[0-9]+)*[.):]?[ \t]+|[a-h][.)][ \t]+)?",
                r"(?:",
                $variants,
                r")\b[^\n:|]*[:|]?[ \t\r]*$"
            ))
            .ok()
        });
    };
}

// ── Front matter ───────────────────────────────────────────────────────────
section_pattern!(
    RE_COVER_LETTER,
    r"cover[ \t]+letter|letter[ \t]+of[ \t]+transmittal|transmittal[ \t]+letter"
);
section_pattern!(RE_EXECUTIVE_SUMMARY, r"executive[ \t]+summary");
section_pattern!(RE_TABLE_OF_CONTENTS, r"table[ \t]+of[ \t]+contents|contents");
section_pattern!(
    RE_TRUTHFUL_ACCURATE_STATEMENT,
    r"truthful[ \t]+(?:and|&)[ \t]+accura(?:te|cy)"
);
section_pattern!(
    RE_SUMMARY_510K,
    r"510\(?k\)?[ \t]+(?:summary|statement)|summary[ \t]+of[ \t]+safety[ \t]+and[ \t]+effectiveness"
);
section_pattern!(
    RE_DEVICE_DESCRIPTION,
    r"device[ \t]+description|description[ \t]+of[ \t]+(?:the[ \t]+)?(?:subject[ \t]+)?device"
);
section_pattern!(
    RE_INDICATIONS_FOR_USE,
    r"indications?[ \t]+for[ \t]+use|intended[ \t]+use"
);

// ── Equivalence ────────────────────────────────────────────────────────────
section_pattern!(
    RE_SUBSTANTIAL_EQUIVALENCE,
    r"substantial[ \t]+equivalence|substantially[ \t]+equivalent|equivalence[ \t]+discussion"
);
section_pattern!(
    RE_PREDICATE_COMPARISON,
    r"predicate[ \t]+(?:device[ \t]+)?comparison|comparison[ \t]+(?:to|with)[ \t]+(?:the[ \t]+)?predicate|predicate[ \t]+devices?|comparison[ \t]+table"
);
section_pattern!(
    RE_TECHNOLOGICAL_CHARACTERISTICS,
    r"technological[ \t]+characteristics|technology[ \t]+comparison"
);

// ── Testing, safety, and studies ───────────────────────────────────────────
section_pattern!(RE_BIOCOMPATIBILITY, r"biocompatibility|biological[ \t]+evaluation");
section_pattern!(RE_STERILIZATION, r"sterilization|sterility");
section_pattern!(
    RE_SHELF_LIFE,
    r"shelf[ \t-]?life|package[ \t]+integrity|packaging[ \t]+validation"
);
section_pattern!(
    RE_REPROCESSING,
    r"reprocessing|cleaning[ \t]+(?:and|&)[ \t]+disinfection|cleaning[ \t]+validation"
);
section_pattern!(
    RE_SOFTWARE_VALIDATION,
    r"software(?:[ \t]+(?:validation|verification|documentation|description))?"
);
section_pattern!(RE_CYBERSECURITY, r"cyber[ \t-]?security");
section_pattern!(RE_ELECTRICAL_SAFETY, r"electrical[ \t]+safety");
section_pattern!(
    RE_ELECTROMAGNETIC_COMPATIBILITY,
    r"electromagnetic[ \t]+compatibility|emc"
);
section_pattern!(
    RE_PERFORMANCE_TESTING_BENCH,
    r"bench[ \t]+(?:performance[ \t]+)?test(?:ing|s)?|performance[ \t]+test(?:ing|s)?|performance[ \t]+data"
);
section_pattern!(
    RE_NON_CLINICAL_TESTING,
    r"non[ \t-]?clinical[ \t]+(?:testing|tests|studies|data|performance[ \t]+data)"
);
section_pattern!(
    RE_ANIMAL_STUDIES,
    r"animal[ \t]+(?:studies|study|testing)|in[ \t]+vivo[ \t]+(?:studies|testing)"
);
section_pattern!(
    RE_CLINICAL_STUDIES,
    r"clinical[ \t]+(?:studies|study|testing|data|evaluation|trials?|performance[ \t]+data)"
);
section_pattern!(RE_HUMAN_FACTORS, r"human[ \t]+factors|usability(?:[ \t]+engineering)?");
section_pattern!(
    RE_MRI_SAFETY,
    r"mri[ \t]+(?:safety|compatibility)|magnetic[ \t]+resonance"
);

// ── Closing matter ─────────────────────────────────────────────────────────
section_pattern!(RE_RISK_ANALYSIS, r"risk[ \t]+(?:analysis|management|assessment)");
section_pattern!(
    RE_LABELING,
    r"label(?:l)?ing|proposed[ \t]+label(?:l)?ing|instructions[ \t]+for[ \t]+use"
);
section_pattern!(
    RE_STANDARDS_CONFORMANCE,
    r"standards[ \t]+conformance|declarations?[ \t]+of[ \t]+conformity|recognized[ \t]+(?:consensus[ \t]+)?standards|consensus[ \t]+standards"
);
section_pattern!(RE_CONCLUSION, r"conclusions?");

/// All families in declaration order of `SectionType`.
/// Earlier families win when several match the same line.
pub fn all_families() -> Vec<SectionFamily> {
    use SectionType::*;
    vec![
        SectionFamily { section_type: CoverLetter, regex: &RE_COVER_LETTER },
        SectionFamily { section_type: ExecutiveSummary, regex: &RE_EXECUTIVE_SUMMARY },
        SectionFamily { section_type: TableOfContents, regex: &RE_TABLE_OF_CONTENTS },
        SectionFamily {
            section_type: TruthfulAccurateStatement,
            regex: &RE_TRUTHFUL_ACCURATE_STATEMENT,
        },
        SectionFamily { section_type: Summary510k, regex: &RE_SUMMARY_510K },
        SectionFamily { section_type: DeviceDescription, regex: &RE_DEVICE_DESCRIPTION },
        SectionFamily { section_type: IndicationsForUse, regex: &RE_INDICATIONS_FOR_USE },
        SectionFamily {
            section_type: SubstantialEquivalence,
            regex: &RE_SUBSTANTIAL_EQUIVALENCE,
        },
        SectionFamily { section_type: PredicateComparison, regex: &RE_PREDICATE_COMPARISON },
        SectionFamily {
            section_type: TechnologicalCharacteristics,
            regex: &RE_TECHNOLOGICAL_CHARACTERISTICS,
        },
        SectionFamily { section_type: Biocompatibility, regex: &RE_BIOCOMPATIBILITY },
        SectionFamily { section_type: Sterilization, regex: &RE_STERILIZATION },
        SectionFamily { section_type: ShelfLife, regex: &RE_SHELF_LIFE },
        SectionFamily { section_type: Reprocessing, regex: &RE_REPROCESSING },
        SectionFamily { section_type: SoftwareValidation, regex: &RE_SOFTWARE_VALIDATION },
        SectionFamily { section_type: Cybersecurity, regex: &RE_CYBERSECURITY },
        SectionFamily { section_type: ElectricalSafety, regex: &RE_ELECTRICAL_SAFETY },
        SectionFamily {
            section_type: ElectromagneticCompatibility,
            regex: &RE_ELECTROMAGNETIC_COMPATIBILITY,
        },
        SectionFamily {
            section_type: PerformanceTestingBench,
            regex: &RE_PERFORMANCE_TESTING_BENCH,
        },
        SectionFamily { section_type: NonClinicalTesting, regex: &RE_NON_CLINICAL_TESTING },
        SectionFamily { section_type: AnimalStudies, regex: &RE_ANIMAL_STUDIES },
        SectionFamily { section_type: ClinicalStudies, regex: &RE_CLINICAL_STUDIES },
        SectionFamily { section_type: HumanFactors, regex: &RE_HUMAN_FACTORS },
        SectionFamily { section_type: MriSafety, regex: &RE_MRI_SAFETY },
        SectionFamily { section_type: RiskAnalysis, regex: &RE_RISK_ANALYSIS },
        SectionFamily { section_type: Labeling, regex: &RE_LABELING },
        SectionFamily { section_type: StandardsConformance, regex: &RE_STANDARDS_CONFORMANCE },
        SectionFamily { section_type: Conclusion, regex: &RE_CONCLUSION },
    ]
}

/// Section types whose pattern failed to compile. Such a family simply
/// never matches; callers surface the list instead of failing.
pub fn pattern_health() -> Vec<SectionType> {
    let failed: Vec<SectionType> = all_families()
        .into_iter()
        .filter(|f| f.regex.is_none())
        .map(|f| f.section_type)
        .collect();
    for section_type in &failed {
        tracing::warn!(section = %section_type, "section pattern failed to compile");
    }
    failed
}
