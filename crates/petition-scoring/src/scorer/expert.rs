//! Expert-validation contribution parsed from a free-text assessment.

use serde::{Deserialize, Serialize};

use petition_core::config::ExpertConfig;

/// Stated confidence, highest first. Only the first level found counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Unstated,
}

/// Stated support for the claim. `Strongly` wins over plain `Supports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Strongly,
    Supports,
    Unstated,
}

/// What was read out of one assessment string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertAssessment {
    pub confidence: ConfidenceLevel,
    pub support: SupportLevel,
    pub score: u32,
}

impl ExpertAssessment {
    pub fn is_validated(&self) -> bool {
        self.score > 0
    }
}

/// Parse an assessment. Case-insensitive substring search; confidence and
/// support are decided independently and summed.
pub fn assess_expert_validation(validation: &str, config: &ExpertConfig) -> ExpertAssessment {
    let text = validation.to_lowercase();

    let (confidence, confidence_score) = if text.contains("high confidence") {
        (ConfidenceLevel::High, config.high_confidence)
    } else if text.contains("medium confidence") {
        (ConfidenceLevel::Medium, config.medium_confidence)
    } else if text.contains("low confidence") {
        (ConfidenceLevel::Low, config.low_confidence)
    } else {
        (ConfidenceLevel::Unstated, 0)
    };

    // "strongly supports" also contains "supports", so test it first.
    let (support, support_score) = if text.contains("strongly supports") {
        (SupportLevel::Strongly, config.strongly_supports)
    } else if text.contains("supports") {
        (SupportLevel::Supports, config.supports)
    } else {
        (SupportLevel::Unstated, 0)
    };

    ExpertAssessment {
        confidence,
        support,
        score: confidence_score.saturating_add(support_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u32 {
        assess_expert_validation(text, &ExpertConfig::default()).score
    }

    #[test]
    fn test_high_and_strong() {
        let a = assess_expert_validation(
            "High confidence. Strongly supports the claim.",
            &ExpertConfig::default(),
        );
        assert_eq!(a.confidence, ConfidenceLevel::High);
        assert_eq!(a.support, SupportLevel::Strongly);
        assert_eq!(a.score, 5);
    }

    #[test]
    fn test_confidence_levels_mutually_exclusive() {
        assert_eq!(score("high confidence overall, low confidence in the dates"), 3);
        assert_eq!(score("low confidence, then medium confidence"), 2);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let config = ExpertConfig {
            high_confidence: u32::MAX,
            strongly_supports: 7,
            ..ExpertConfig::default()
        };
        let a = assess_expert_validation("High confidence, strongly supports", &config);
        assert_eq!(a.score, u32::MAX);
    }

    #[test]
    fn test_plain_supports() {
        assert_eq!(score("The evidence supports the claim. Low confidence."), 2);
    }

    #[test]
    fn test_nothing_recognised() {
        let a = assess_expert_validation("Inconclusive.", &ExpertConfig::default());
        assert_eq!(a.score, 0);
        assert!(!a.is_validated());
        assert_eq!(a.confidence, ConfidenceLevel::Unstated);
        assert_eq!(a.support, SupportLevel::Unstated);
    }

    #[test]
    fn test_unsupported_is_not_supports() {
        // substring semantics: "unsupported" does not contain "supports"
        assert_eq!(score("unsupported"), 0);
        assert_eq!(score("nothing here supports it"), 1);
    }
}
