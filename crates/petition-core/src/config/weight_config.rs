//! Weight and threshold sections of the scoring config.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Bibliometric thresholds and their weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicConfig {
    /// `citation_count` must be strictly greater than this.
    pub citation_threshold: u32,
    /// `influential_citation_count` must be strictly greater than this.
    pub influential_citation_threshold: u32,
    /// `year` must be at least this.
    pub recent_year_threshold: i32,
    pub citations: u32,
    pub influential_citations: u32,
    pub recent_publication: u32,
}

impl Default for AcademicConfig {
    fn default() -> Self {
        Self {
            citation_threshold: defaults::CITATION_THRESHOLD,
            influential_citation_threshold: defaults::INFLUENTIAL_CITATION_THRESHOLD,
            recent_year_threshold: defaults::RECENT_YEAR_THRESHOLD,
            citations: defaults::CITATIONS_WEIGHT,
            influential_citations: defaults::INFLUENTIAL_CITATIONS_WEIGHT,
            recent_publication: defaults::RECENT_PUBLICATION_WEIGHT,
        }
    }
}

/// Authority-domain and content-indicator weights for web evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSourceConfig {
    pub government: u32,
    pub academic: u32,
    pub organization: u32,
    pub research_indicators: u32,
    pub recognition_indicators: u32,
}

impl Default for WebSourceConfig {
    fn default() -> Self {
        Self {
            government: defaults::GOVERNMENT_WEIGHT,
            academic: defaults::ACADEMIC_SOURCE_WEIGHT,
            organization: defaults::ORGANIZATION_WEIGHT,
            research_indicators: defaults::RESEARCH_INDICATORS_WEIGHT,
            recognition_indicators: defaults::RECOGNITION_INDICATORS_WEIGHT,
        }
    }
}

/// Weights for phrases found in the expert assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertConfig {
    pub high_confidence: u32,
    pub medium_confidence: u32,
    pub low_confidence: u32,
    pub strongly_supports: u32,
    pub supports: u32,
}

impl Default for ExpertConfig {
    fn default() -> Self {
        Self {
            high_confidence: defaults::HIGH_CONFIDENCE_WEIGHT,
            medium_confidence: defaults::MEDIUM_CONFIDENCE_WEIGHT,
            low_confidence: defaults::LOW_CONFIDENCE_WEIGHT,
            strongly_supports: defaults::STRONGLY_SUPPORTS_WEIGHT,
            supports: defaults::SUPPORTS_WEIGHT,
        }
    }
}
