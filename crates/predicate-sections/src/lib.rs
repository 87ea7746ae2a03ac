//! # predicate-sections
//!
//! Heading pattern families for the 28 section types and the two-tier
//! detector that turns heading matches into non-overlapping section spans.

pub mod detector;
pub mod patterns;

pub use detector::{Detection, DetectionStats, SectionDetector};
pub use patterns::{all_families, pattern_health, SectionFamily};
