//! The validate-and-rank step and the state it persists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use petition_core::{Category, EvidenceRecord, PetitionResult, ScoredEvidence};
use petition_scoring::{categorize, CategorizedEvidence, EvidenceScorer, RankingSummary};

/// Persisted output of the validate-and-rank step.
///
/// `category_index` maps each present category to positions in
/// `validated_evidence`, in rank order. `record_hashes[i]` fingerprints
/// `validated_evidence[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    pub summary: RankingSummary,
    pub validated_evidence: Vec<ScoredEvidence>,
    pub category_index: BTreeMap<Category, Vec<usize>>,
    pub record_hashes: Vec<String>,
}

impl ValidationState {
    pub fn build(input: usize, minimum_score: u32, ranked: Vec<ScoredEvidence>) -> PetitionResult<Self> {
        let buckets = categorize(&ranked);
        let summary = RankingSummary::new(input, minimum_score, &ranked, &buckets);

        let mut category_index: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
        for (position, evidence) in ranked.iter().enumerate() {
            for category in &evidence.categories {
                category_index.entry(*category).or_default().push(position);
            }
        }

        let record_hashes = ranked
            .iter()
            .map(|e| e.content_hash())
            .collect::<PetitionResult<Vec<_>>>()?;

        Ok(Self {
            summary,
            validated_evidence: ranked,
            category_index,
            record_hashes,
        })
    }

    /// Category buckets borrowed from `validated_evidence`.
    pub fn buckets(&self) -> CategorizedEvidence<'_> {
        categorize(&self.validated_evidence)
    }

    /// False when any record no longer matches its stored fingerprint, which
    /// means the state file was edited or written by a different scorer.
    pub fn verify(&self) -> bool {
        if self.record_hashes.len() != self.validated_evidence.len() {
            return false;
        }
        self.validated_evidence
            .iter()
            .zip(&self.record_hashes)
            .all(|(e, h)| e.content_hash().map(|c| &c == h).unwrap_or(false))
    }
}

/// Score, filter and rank a batch, and package the result for checkpointing.
pub fn run_validation_step(
    scorer: &EvidenceScorer,
    records: Vec<EvidenceRecord>,
) -> PetitionResult<ValidationState> {
    let input = records.len();
    let minimum = scorer.config().minimum_evidence_score;
    let ranked = scorer.validate_and_rank(records);
    if ranked.is_empty() && input > 0 {
        warn!(input, minimum, "no evidence met the minimum score");
    }
    let state = ValidationState::build(input, minimum, ranked)?;
    info!(
        retained = state.summary.retained,
        dropped = state.summary.dropped,
        categories = state.category_index.len(),
        "validation step complete"
    );
    Ok(state)
}
