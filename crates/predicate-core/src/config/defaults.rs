//! Compiled defaults. Single source of truth for every tunable value.

// OCR
pub const DEFAULT_MAX_SUBSTITUTIONS_PER_LINE: usize = 2;
pub const DEFAULT_HIGH_QUALITY_MAX_ERROR_RATE: f64 = 0.5;
pub const DEFAULT_LOW_QUALITY_MIN_ERROR_RATE: f64 = 2.0;
/// Below this many non-whitespace characters quality is not estimable.
pub const DEFAULT_MIN_ESTIMABLE_CHARS: usize = 20;
/// One stray `|` per this many characters is tolerated before it counts as misread.
pub const DEFAULT_PIPE_ALLOWANCE_CHARS: usize = 500;
pub const DEFAULT_TRUST_SCANNED_HINT: bool = true;

// Sections
pub const DEFAULT_SE_WINDOW_CHARS: usize = 2000;
pub const DEFAULT_MAX_HEADING_CHARS: usize = 80;

// Scoring
pub const DEFAULT_CONDITIONAL_DECISION_CODES: [&str; 3] = ["SESP", "SESU", "SESR"];

// Risk
pub const DEFAULT_OLD_DEVICE_YEARS: u32 = 10;
pub const DEFAULT_HIGH_MAUDE_EVENTS: u64 = 100;

// Engine
/// 0 = one worker per available core.
pub const DEFAULT_WORKERS: usize = 0;

// Observability
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
