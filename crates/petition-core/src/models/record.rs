//! Evidence records: the unit the scoring engine operates on.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{null_as_default, AcademicEvidence, Category, Claim, ClaimType, WebEvidenceItem};
use crate::errors::PetitionResult;

/// Everything gathered for one claim, before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub claim_text: String,
    pub claim_type: ClaimType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial_evidence: String,
    /// `null` and a missing key both mean no web hits.
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_evidence: Vec<WebEvidenceItem>,
    /// `None` when no bibliographic match was found.
    #[serde(default)]
    pub academic_evidence: Option<AcademicEvidence>,
    /// `None` when the assessment call failed.
    #[serde(default)]
    pub expert_validation: Option<String>,
}

impl EvidenceRecord {
    /// Start an empty record for a claim.
    pub fn for_claim(claim: &Claim) -> Self {
        Self {
            claim_text: claim.claim_text.clone(),
            claim_type: claim.claim_type,
            initial_evidence: claim.initial_evidence.clone(),
            web_evidence: Vec::new(),
            academic_evidence: None,
            expert_validation: None,
        }
    }

    pub fn with_web_evidence(mut self, items: Vec<WebEvidenceItem>) -> Self {
        self.web_evidence = items;
        self
    }

    pub fn with_academic(mut self, academic: AcademicEvidence) -> Self {
        self.academic_evidence = Some(academic);
        self
    }

    pub fn with_expert_validation(mut self, validation: impl Into<String>) -> Self {
        self.expert_validation = Some(validation.into());
        self
    }
}

/// An evidence record after scoring. Serializes flat: the record's fields
/// plus `strength_score` and `categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredEvidence {
    #[serde(flatten)]
    pub record: EvidenceRecord,
    /// Sum of every contribution. Never negative.
    pub strength_score: u32,
    /// Deduplicated tags from every scoring block.
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl ScoredEvidence {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// blake3 fingerprint of the serialized record, written into checkpoints
    /// so a resumed run can tell whether its state is stale.
    pub fn content_hash(&self) -> PetitionResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
