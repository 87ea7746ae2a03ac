/// Engine version, stamped into every batch report.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Citation weight of a citing document whose occurrences include SE context.
pub const SE_CITATION_WEIGHT: f64 = 1.0;

/// Citation weight of a citing document with no SE-context occurrence.
pub const GENERAL_CITATION_WEIGHT: f64 = 0.5;

/// Upper bound of a confidence score total.
pub const MAX_CONFIDENCE_SCORE: u32 = 100;

/// Number of closed section pattern families.
pub const SECTION_FAMILY_COUNT: usize = 28;

/// Error indicators are normalized per this many characters.
pub const ERROR_RATE_UNIT_CHARS: f64 = 100.0;
