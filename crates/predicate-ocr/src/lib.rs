//! # predicate-ocr
//!
//! OCR quality estimation over whole documents and bounded correction of
//! heading-length lines. Both are pure functions of their input.

pub mod corrector;
pub mod glyphs;
pub mod keywords;
pub mod quality;

pub use corrector::{CorrectedLine, OcrCorrector};
pub use quality::OcrQualityEstimator;
