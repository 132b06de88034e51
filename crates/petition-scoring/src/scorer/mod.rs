//! Aggregate scorer: combines the academic, web and expert blocks into one
//! strength score and category set per record.

pub mod academic;
pub mod expert;

pub use academic::score_academic;
pub use expert::{assess_expert_validation, ConfidenceLevel, ExpertAssessment, SupportLevel};

use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use petition_core::config::ClassifyBy;
use petition_core::{Category, EvidenceRecord, PetitionResult, ScoredEvidence, ScoringConfig};

use crate::ranking::filter_and_rank;
use crate::signals::{total_weight, ContentSignalDetector, SourceClassifier};

/// Per-block contributions. `total()` is the strength score, saturating at
/// `u32::MAX` when configured weights are large enough to overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub academic: u32,
    pub source: u32,
    pub content: u32,
    pub expert: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.academic
            .saturating_add(self.source)
            .saturating_add(self.content)
            .saturating_add(self.expert)
    }
}

/// Scoring outcome for one record, without taking ownership of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScore {
    pub breakdown: ScoreBreakdown,
    pub categories: BTreeSet<Category>,
}

impl RecordScore {
    pub fn strength_score(&self) -> u32 {
        self.breakdown.total()
    }
}

/// The scoring engine. Holds an immutable config and the compiled patterns.
/// `Send + Sync`; share one instance across threads freely.
#[derive(Debug, Clone)]
pub struct EvidenceScorer {
    config: ScoringConfig,
    classifier: SourceClassifier,
    detector: ContentSignalDetector,
}

impl EvidenceScorer {
    /// Validate the config and compile its patterns.
    pub fn new(config: ScoringConfig) -> PetitionResult<Self> {
        config.validate()?;
        let classifier = SourceClassifier::new(&config.patterns, &config.web)?;
        let detector = ContentSignalDetector::new(&config.indicators, &config.web);
        Ok(Self {
            config,
            classifier,
            detector,
        })
    }

    /// Scorer with the default weights and thresholds.
    pub fn with_defaults() -> PetitionResult<Self> {
        Self::new(ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute the score and tags for a record.
    pub fn assess(&self, record: &EvidenceRecord) -> RecordScore {
        let mut breakdown = ScoreBreakdown::default();
        let mut categories = BTreeSet::new();

        // Present but empty still counts as present.
        if let Some(academic) = &record.academic_evidence {
            breakdown.academic = score_academic(academic, &self.config.academic);
            categories.insert(Category::Academic);
        }

        for item in &record.web_evidence {
            let target = match self.config.classify_by {
                ClassifyBy::SourceTag => item.source.as_str(),
                ClassifyBy::Url => item.url.as_deref().unwrap_or(""),
            };
            let source_hits = self.classifier.classify(target);
            if source_hits.is_empty() && self.config.classify_by == ClassifyBy::SourceTag {
                if let Some(url) = item.url.as_deref() {
                    if self.classifier.is_authority(url) {
                        debug!(
                            source = %item.source,
                            url,
                            "authority domain in url ignored: classification keyed on provider tag"
                        );
                    }
                }
            }

            let content_hits = self.detector.detect(item.snippet_text());

            breakdown.source = breakdown.source.saturating_add(total_weight(&source_hits));
            breakdown.content = breakdown.content.saturating_add(total_weight(&content_hits));
            categories.extend(source_hits.iter().chain(content_hits.iter()).map(|h| h.category));
        }

        if let Some(validation) = record.expert_validation.as_deref() {
            let assessment = assess_expert_validation(validation, &self.config.expert);
            breakdown.expert = assessment.score;
            if assessment.is_validated() {
                categories.insert(Category::ExpertValidated);
            }
        }

        RecordScore {
            breakdown,
            categories,
        }
    }

    /// Score a record, attaching `strength_score` and `categories`.
    pub fn score(&self, record: EvidenceRecord) -> ScoredEvidence {
        let RecordScore {
            breakdown,
            categories,
        } = self.assess(&record);
        debug!(
            claim = %truncate(&record.claim_text, 60),
            academic = breakdown.academic,
            source = breakdown.source,
            content = breakdown.content,
            expert = breakdown.expert,
            total = breakdown.total(),
            "scored evidence record"
        );
        ScoredEvidence {
            record,
            strength_score: breakdown.total(),
            categories,
        }
    }

    /// Score every record in order.
    pub fn score_batch(&self, records: Vec<EvidenceRecord>) -> Vec<ScoredEvidence> {
        records.into_iter().map(|r| self.score(r)).collect()
    }

    /// Score on the rayon pool. Output order matches input order.
    pub fn score_batch_parallel(&self, records: Vec<EvidenceRecord>) -> Vec<ScoredEvidence> {
        records.into_par_iter().map(|r| self.score(r)).collect()
    }

    /// Score, drop everything below the minimum score, rank descending.
    pub fn validate_and_rank(&self, records: Vec<EvidenceRecord>) -> Vec<ScoredEvidence> {
        let input = records.len();
        let scored = self.score_batch(records);
        let ranked = filter_and_rank(scored, self.config.minimum_evidence_score);
        info!(
            input,
            retained = ranked.len(),
            minimum_score = self.config.minimum_evidence_score,
            "evidence validated and ranked"
        );
        ranked
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petition_core::{AcademicEvidence, Claim, ClaimType, WebEvidenceItem};

    fn record() -> EvidenceRecord {
        EvidenceRecord::for_claim(&Claim::new("claim", ClaimType::Merit, ""))
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let scorer = EvidenceScorer::with_defaults().unwrap();
        let scored = scorer.score(record());
        assert_eq!(scored.strength_score, 0);
        assert!(scored.categories.is_empty());
    }

    #[test]
    fn test_empty_academic_block_tags_academic() {
        let scorer = EvidenceScorer::with_defaults().unwrap();
        let scored = scorer.score(record().with_academic(AcademicEvidence::default()));
        assert_eq!(scored.strength_score, 0);
        assert!(scored.has_category(Category::Academic));
    }

    #[test]
    fn test_unmatched_expert_text_not_tagged() {
        let scorer = EvidenceScorer::with_defaults().unwrap();
        let scored = scorer.score(record().with_expert_validation("unclear"));
        assert!(!scored.has_category(Category::ExpertValidated));
    }

    #[test]
    fn test_web_contributions_sum_over_items() {
        let scorer = EvidenceScorer::with_defaults().unwrap();
        let scored = scorer.score(record().with_web_evidence(vec![
            WebEvidenceItem::new("serp").with_snippet("award winning"),
            WebEvidenceItem::new("you.com").with_snippet("another award"),
        ]));
        assert_eq!(scored.strength_score, 4);
        assert_eq!(scored.categories.len(), 1);
    }

    #[test]
    fn test_classify_by_url() {
        let config = ScoringConfig {
            classify_by: ClassifyBy::Url,
            ..ScoringConfig::default()
        };
        let scorer = EvidenceScorer::new(config).unwrap();
        let item = WebEvidenceItem::new("serp").with_url("https://www.nsf.gov/news");
        let score = scorer.assess(&record().with_web_evidence(vec![item]));
        assert_eq!(score.breakdown.source, 3);
        assert!(score.categories.contains(&Category::Government));
    }

    #[test]
    fn test_provider_tag_default_ignores_url() {
        let scorer = EvidenceScorer::with_defaults().unwrap();
        let item = WebEvidenceItem::new("serp").with_url("https://www.nsf.gov/news");
        let score = scorer.assess(&record().with_web_evidence(vec![item]));
        assert_eq!(score.breakdown.source, 0);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
