use predicate_core::config::ScoringConfig;
use predicate_core::models::ConfidenceScore;

use crate::formula;
use crate::inputs::ScoringInputs;

/// Confidence scorer over a fixed scoring configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    config: ScoringConfig,
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one (identifier, citing document) pair.
    pub fn score(
        &self,
        identifier: &str,
        document_id: &str,
        inputs: &ScoringInputs,
    ) -> ConfidenceScore {
        let policy = &self.config.policy;
        let components = formula::compute(inputs, policy);
        let total = components.total();
        ConfidenceScore {
            identifier: identifier.to_string(),
            document_id: document_id.to_string(),
            components,
            total,
            label: formula::label_for(total, policy),
        }
    }
}
