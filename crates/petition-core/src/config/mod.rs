//! Scoring configuration. Built once, passed into the scorer, never mutated.

pub mod defaults;
pub mod indicator_config;
pub mod weight_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use indicator_config::{ClassifyBy, IndicatorConfig, SourcePatterns};
pub use weight_config::{AcademicConfig, ExpertConfig, WebSourceConfig};

use crate::errors::{PetitionError, PetitionResult};

/// Top-level configuration aggregating every scoring section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Inclusive threshold below which a scored record is dropped.
    pub minimum_evidence_score: u32,
    /// Which web evidence field the source patterns are matched against.
    pub classify_by: ClassifyBy,
    pub academic: AcademicConfig,
    pub web: WebSourceConfig,
    pub expert: ExpertConfig,
    pub patterns: SourcePatterns,
    pub indicators: IndicatorConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            minimum_evidence_score: defaults::MINIMUM_EVIDENCE_SCORE,
            classify_by: ClassifyBy::default(),
            academic: AcademicConfig::default(),
            web: WebSourceConfig::default(),
            expert: ExpertConfig::default(),
            patterns: SourcePatterns::default(),
            indicators: IndicatorConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> PetitionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with a different minimum score.
    pub fn with_minimum_score(mut self, minimum_evidence_score: u32) -> Self {
        self.minimum_evidence_score = minimum_evidence_score;
        self
    }

    /// Reject patterns that do not compile and blank indicator phrases.
    pub fn validate(&self) -> PetitionResult<()> {
        for (category, pattern) in self.patterns.entries() {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(PetitionError::InvalidPattern {
                    category: category.to_string(),
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        let phrases = self
            .indicators
            .research
            .iter()
            .chain(self.indicators.recognition.iter());
        for phrase in phrases {
            if phrase.trim().is_empty() {
                return Err(PetitionError::Config(
                    "indicator phrases must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}
