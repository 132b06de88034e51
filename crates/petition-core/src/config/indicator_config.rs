//! Source-domain patterns and content indicator phrases.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Regexes matched against the lower-cased classification field of each web
/// evidence item. Evaluated independently: one item can match several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePatterns {
    pub government: String,
    pub academic: String,
    pub organization: String,
}

impl SourcePatterns {
    /// `(category label, pattern)` pairs in evaluation order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("government", self.government.as_str()),
            ("academic", self.academic.as_str()),
            ("organization", self.organization.as_str()),
        ]
    }
}

impl Default for SourcePatterns {
    fn default() -> Self {
        Self {
            government: defaults::GOVERNMENT_PATTERN.to_string(),
            academic: defaults::ACADEMIC_PATTERN.to_string(),
            organization: defaults::ORGANIZATION_PATTERN.to_string(),
        }
    }
}

/// Substring phrases looked for in lower-cased snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub research: Vec<String>,
    pub recognition: Vec<String>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            research: defaults::RESEARCH_INDICATORS.iter().map(|s| s.to_string()).collect(),
            recognition: defaults::RECOGNITION_INDICATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Field of a web evidence item the source patterns are applied to.
///
/// `SourceTag` matches the provider tag and is the default. Provider tags such
/// as `"serp"` never carry an authority domain, so in practice it scores zero;
/// `Url` classifies by the page address instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyBy {
    #[default]
    SourceTag,
    Url,
}
