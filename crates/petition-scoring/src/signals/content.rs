//! Lexical indicators of research backing or external recognition in snippets.

use petition_core::config::{IndicatorConfig, WebSourceConfig};
use petition_core::Category;

use super::SignalHit;

/// Substring detector over lower-cased snippet text.
#[derive(Debug, Clone)]
pub struct ContentSignalDetector {
    research: Vec<String>,
    recognition: Vec<String>,
    research_weight: u32,
    recognition_weight: u32,
}

impl ContentSignalDetector {
    pub fn new(indicators: &IndicatorConfig, weights: &WebSourceConfig) -> Self {
        Self {
            research: indicators.research.iter().map(|p| p.to_lowercase()).collect(),
            recognition: indicators.recognition.iter().map(|p| p.to_lowercase()).collect(),
            research_weight: weights.research_indicators,
            recognition_weight: weights.recognition_indicators,
        }
    }

    /// Each indicator set fires at most once per snippet, independently of
    /// the other. Substring match, not whole-word.
    pub fn detect(&self, snippet: &str) -> Vec<SignalHit> {
        let mut hits = Vec::new();
        if snippet.is_empty() {
            return hits;
        }
        let text = snippet.to_lowercase();

        if self.research.iter().any(|p| text.contains(p.as_str())) {
            hits.push(SignalHit {
                category: Category::ResearchBased,
                weight: self.research_weight,
            });
        }
        if self.recognition.iter().any(|p| text.contains(p.as_str())) {
            hits.push(SignalHit {
                category: Category::Recognition,
                weight: self.recognition_weight,
            });
        }
        hits
    }
}
