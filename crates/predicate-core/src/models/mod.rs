pub mod citation;
pub mod classification;
pub mod document;
pub mod exclusion;
pub mod identifier;
pub mod occurrence;
pub mod ocr_quality;
pub mod regulatory_history;
pub mod report;
pub mod risk_flag;
pub mod score;
pub mod section;

pub use citation::CitationRecord;
pub use classification::{
    ClassificationDecision, DecisionBasis, FinalClassification, PriorClassification,
};
pub use document::{DocumentText, SourceHint, TextRegion};
pub use exclusion::ExclusionList;
pub use identifier::IdentifierKind;
pub use occurrence::{ContextEvidence, IdentifierOccurrence, OccurrenceContext};
pub use ocr_quality::{ErrorIndicatorCounts, OcrQualityLevel, OcrQualityReport};
pub use regulatory_history::{
    age_in_years, LookupStatus, RecallClass, RegulatoryHistory, SubmissionType, SummaryType,
};
pub use report::{BatchReport, DocumentAnalysis, IdentifierReport};
pub use risk_flag::{FlagKind, RiskFlag, Severity};
pub use score::{ConfidenceScore, ScoreComponents, ScoreLabel};
pub use section::{Correction, CorrectionKind, DetectionTier, SectionSpan, SectionType};
