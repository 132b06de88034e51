//! Evidence gathering seams.
//!
//! Network clients live outside this crate. They plug in through the traits
//! below; the gatherer turns their output into one `EvidenceRecord` per claim
//! and absorbs their failures so a single bad provider never sinks a batch.

mod error;
mod prompt;

pub use error::GatherError;
pub use prompt::build_review_prompt;

use tracing::{debug, warn};

use petition_core::{AcademicEvidence, Claim, EvidenceRecord, WebEvidenceItem};

use crate::claims::contains_academic_reference;

/// A raw search hit, before it is tagged with its provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebHit {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub url: Option<String>,
}

/// A web search provider (`"serp"`, `"you.com"`, ...).
pub trait IWebSearch: Send + Sync {
    /// Tag written into each item's `source` field.
    fn provider(&self) -> &str;
    fn search(&self, query: &str) -> Result<Vec<WebHit>, GatherError>;
}

/// Bibliographic lookup. `Ok(None)` means no matching paper.
pub trait IScholarLookup: Send + Sync {
    fn lookup(&self, claim_text: &str) -> Result<Option<AcademicEvidence>, GatherError>;
}

/// Natural-language assessment of a claim against its web evidence.
pub trait IExpertReview: Send + Sync {
    fn review(&self, claim_text: &str, evidence: &[WebEvidenceItem]) -> Result<String, GatherError>;
}

/// Builds evidence records from whichever collaborators are configured.
#[derive(Default)]
pub struct EvidenceGatherer {
    web: Vec<Box<dyn IWebSearch>>,
    scholar: Option<Box<dyn IScholarLookup>>,
    expert: Option<Box<dyn IExpertReview>>,
}

impl EvidenceGatherer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Providers are queried in the order they are added.
    pub fn with_web_search(mut self, provider: Box<dyn IWebSearch>) -> Self {
        self.web.push(provider);
        self
    }

    pub fn with_scholar(mut self, scholar: Box<dyn IScholarLookup>) -> Self {
        self.scholar = Some(scholar);
        self
    }

    pub fn with_expert(mut self, expert: Box<dyn IExpertReview>) -> Self {
        self.expert = Some(expert);
        self
    }

    /// Gather everything for one claim. Never fails: collaborator errors are
    /// logged and leave the corresponding field empty or absent.
    pub fn gather_for_claim(&self, claim: &Claim) -> EvidenceRecord {
        let mut record = EvidenceRecord::for_claim(claim);

        for provider in &self.web {
            match provider.search(&claim.claim_text) {
                Ok(hits) => {
                    debug!(provider = provider.provider(), hits = hits.len(), "web search complete");
                    record.web_evidence.extend(hits.into_iter().map(|hit| WebEvidenceItem {
                        source: provider.provider().to_string(),
                        title: hit.title,
                        snippet: hit.snippet,
                        url: hit.url,
                    }));
                }
                Err(e) => {
                    warn!(provider = provider.provider(), error = %e, "web search failed, skipping provider");
                }
            }
        }

        if let Some(scholar) = &self.scholar {
            if contains_academic_reference(&claim.claim_text) {
                match scholar.lookup(&claim.claim_text) {
                    Ok(found) => record.academic_evidence = found,
                    Err(e) => warn!(error = %e, "scholar lookup failed, no academic evidence"),
                }
            }
        }

        if let Some(expert) = &self.expert {
            match expert.review(&claim.claim_text, &record.web_evidence) {
                Ok(text) => record.expert_validation = Some(text),
                Err(e) => warn!(error = %e, "expert review failed, no validation"),
            }
        }

        record
    }

    /// One record per claim, in claim order.
    pub fn gather_all(&self, claims: &[Claim]) -> Vec<EvidenceRecord> {
        claims.iter().map(|c| self.gather_for_claim(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petition_core::ClaimType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSearch(&'static str, Vec<WebHit>);

    impl IWebSearch for FixedSearch {
        fn provider(&self) -> &str {
            self.0
        }
        fn search(&self, _query: &str) -> Result<Vec<WebHit>, GatherError> {
            Ok(self.1.clone())
        }
    }

    struct FailingSearch;

    impl IWebSearch for FailingSearch {
        fn provider(&self) -> &str {
            "perplexity"
        }
        fn search(&self, _query: &str) -> Result<Vec<WebHit>, GatherError> {
            Err(GatherError::Provider {
                provider: "perplexity".into(),
                reason: "401".into(),
            })
        }
    }

    struct CountingScholar(AtomicUsize);

    impl IScholarLookup for CountingScholar {
        fn lookup(&self, _claim_text: &str) -> Result<Option<AcademicEvidence>, GatherError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Some(AcademicEvidence {
                citation_count: 80,
                ..Default::default()
            }))
        }
    }

    struct EchoExpert;

    impl IExpertReview for EchoExpert {
        fn review(&self, _claim: &str, evidence: &[WebEvidenceItem]) -> Result<String, GatherError> {
            Ok(format!("High confidence from {} items", evidence.len()))
        }
    }

    struct DownExpert;

    impl IExpertReview for DownExpert {
        fn review(&self, _claim: &str, _evidence: &[WebEvidenceItem]) -> Result<String, GatherError> {
            Err(GatherError::Unavailable("timeout".into()))
        }
    }

    fn hit(snippet: &str) -> WebHit {
        WebHit {
            snippet: Some(snippet.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_items_tagged_with_provider_in_order() {
        let gatherer = EvidenceGatherer::new()
            .with_web_search(Box::new(FixedSearch("you.com", vec![hit("a")])))
            .with_web_search(Box::new(FailingSearch))
            .with_web_search(Box::new(FixedSearch("serp", vec![hit("b"), hit("c")])));
        let record = gatherer.gather_for_claim(&Claim::new("x", ClaimType::Merit, ""));
        let sources: Vec<&str> = record.web_evidence.iter().map(|w| w.source.as_str()).collect();
        assert_eq!(sources, vec!["you.com", "serp", "serp"]);
    }

    #[test]
    fn test_scholar_only_for_academic_claims() {
        let scholar = CountingScholar(AtomicUsize::new(0));
        let gatherer = EvidenceGatherer::new().with_scholar(Box::new(scholar));
        let plain = gatherer.gather_for_claim(&Claim::new("I led a team", ClaimType::Merit, ""));
        assert!(plain.academic_evidence.is_none());
        let cited = gatherer
            .gather_for_claim(&Claim::new("My paper was published", ClaimType::Merit, ""));
        assert_eq!(cited.academic_evidence.map(|a| a.citation_count), Some(80));
    }

    #[test]
    fn test_expert_sees_gathered_web_items() {
        let gatherer = EvidenceGatherer::new()
            .with_web_search(Box::new(FixedSearch("serp", vec![hit("a"), hit("b")])))
            .with_expert(Box::new(EchoExpert));
        let record = gatherer.gather_for_claim(&Claim::new("x", ClaimType::Importance, ""));
        assert_eq!(record.expert_validation.as_deref(), Some("High confidence from 2 items"));
    }

    #[test]
    fn test_expert_failure_leaves_validation_absent() {
        let gatherer = EvidenceGatherer::new().with_expert(Box::new(DownExpert));
        let records = gatherer.gather_all(&[
            Claim::new("a", ClaimType::Merit, ""),
            Claim::new("b", ClaimType::Merit, ""),
        ]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.expert_validation.is_none()));
    }
}
