//! Configuration for the predicate engine.
//! TOML-based, resolution: env > TOML > compiled defaults.

pub mod defaults;
pub mod engine_config;
pub mod observability_config;
pub mod ocr_config;
pub mod predicate_config;
pub mod risk_config;
pub mod scoring_config;
pub mod section_config;

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use ocr_config::OcrConfig;
pub use predicate_config::PredicateConfig;
pub use risk_config::RiskConfig;
pub use scoring_config::{ScoringConfig, ScoringPolicy};
pub use section_config::SectionConfig;
