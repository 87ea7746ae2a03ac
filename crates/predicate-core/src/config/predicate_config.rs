//! Top-level engine configuration.

use serde::{Deserialize, Serialize};

use super::{
    EngineConfig, ObservabilityConfig, OcrConfig, RiskConfig, ScoringConfig, SectionConfig,
};
use crate::constants::MAX_CONFIDENCE_SCORE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PREDICATE_*`, via `apply_env_overrides`)
/// 2. TOML supplied by the caller (`from_toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredicateConfig {
    pub ocr: OcrConfig,
    pub sections: SectionConfig,
    pub scoring: ScoringConfig,
    pub risk: RiskConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl PredicateConfig {
    /// Parse and validate configuration from a TOML string.
    /// Unknown keys are ignored; missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ocr = &self.ocr;
        if !(ocr.high_quality_max_error_rate.is_finite() && ocr.high_quality_max_error_rate >= 0.0)
        {
            return Err(invalid(
                "ocr.high_quality_max_error_rate",
                "must be a non-negative number",
            ));
        }
        if !(ocr.low_quality_min_error_rate.is_finite()
            && ocr.low_quality_min_error_rate > ocr.high_quality_max_error_rate)
        {
            return Err(invalid(
                "ocr.low_quality_min_error_rate",
                "must be greater than ocr.high_quality_max_error_rate",
            ));
        }
        if ocr.pipe_allowance_chars == 0 {
            return Err(invalid("ocr.pipe_allowance_chars", "must be greater than 0"));
        }
        if self.sections.se_window_chars == 0 {
            return Err(invalid("sections.se_window_chars", "must be greater than 0"));
        }
        if self.sections.max_heading_chars == 0 {
            return Err(invalid("sections.max_heading_chars", "must be greater than 0"));
        }
        if self.risk.old_device_years == 0 {
            return Err(invalid("risk.old_device_years", "must be greater than 0"));
        }

        let policy = &self.scoring.policy;
        if let Some((field, message)) = policy.ordering_problem() {
            return Err(invalid(field, message));
        }
        let max_total = policy.max_total();
        if max_total > MAX_CONFIDENCE_SCORE {
            return Err(invalid(
                "scoring.policy",
                &format!("factor maxima sum to {max_total}, must be at most {MAX_CONFIDENCE_SCORE}"),
            ));
        }
        Ok(())
    }

    /// Apply `PREDICATE_*` environment overrides. Unparseable values are
    /// ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_usize("PREDICATE_WORKERS") {
            self.engine.workers = v;
        }
        if let Some(v) = env_usize("PREDICATE_SE_WINDOW_CHARS") {
            if v > 0 {
                self.sections.se_window_chars = v;
            }
        }
        if let Some(v) = env_usize("PREDICATE_MAX_SUBSTITUTIONS") {
            self.ocr.max_substitutions_per_line = v;
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid environment override");
            None
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
