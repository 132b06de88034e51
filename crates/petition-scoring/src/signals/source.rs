//! Authority-domain classification of web evidence items.
//!
//! Three fixed categories, each with its own pattern and weight:
//! government (`.gov`), academic (`.edu`), organization (`.org`).
//! Patterns are tested independently, so one input can hit several.

use regex::Regex;

use petition_core::config::{SourcePatterns, WebSourceConfig};
use petition_core::{Category, PetitionError, PetitionResult};

use super::SignalHit;

/// Compiled source patterns.
#[derive(Debug, Clone)]
pub struct SourceClassifier {
    compiled: Vec<(Regex, SignalHit)>,
}

impl SourceClassifier {
    /// Compile all three patterns. Fails on the first pattern that does not compile.
    pub fn new(patterns: &SourcePatterns, weights: &WebSourceConfig) -> PetitionResult<Self> {
        let table = [
            (&patterns.government, Category::Government, weights.government),
            (&patterns.academic, Category::Academic, weights.academic),
            (&patterns.organization, Category::Organization, weights.organization),
        ];

        let mut compiled = Vec::with_capacity(table.len());
        for (pattern, category, weight) in table {
            let regex = Regex::new(pattern).map_err(|e| PetitionError::InvalidPattern {
                category: category.to_string(),
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            compiled.push((regex, SignalHit { category, weight }));
        }

        Ok(Self { compiled })
    }

    /// Classify a source string. Matching is case-insensitive.
    /// No match yields an empty list.
    pub fn classify(&self, source: &str) -> Vec<SignalHit> {
        if source.is_empty() {
            return Vec::new();
        }
        let source = source.to_lowercase();
        self.compiled
            .iter()
            .filter(|(regex, _)| regex.is_match(&source))
            .map(|(_, hit)| *hit)
            .collect()
    }

    /// Whether the string matches any authority pattern.
    pub fn is_authority(&self, source: &str) -> bool {
        !self.classify(source).is_empty()
    }
}
