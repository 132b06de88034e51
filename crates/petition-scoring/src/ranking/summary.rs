//! Batch summary written alongside ranked evidence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use petition_core::Category;

use super::CategorizedEvidence;

/// Counts describing one validate-and-rank pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub input: usize,
    pub retained: usize,
    pub dropped: usize,
    pub minimum_score: u32,
    pub top_score: Option<u32>,
    pub per_category: BTreeMap<Category, usize>,
}

impl RankingSummary {
    pub fn new(
        input: usize,
        minimum_score: u32,
        ranked: &[petition_core::ScoredEvidence],
        buckets: &CategorizedEvidence<'_>,
    ) -> Self {
        Self {
            input,
            retained: ranked.len(),
            dropped: input.saturating_sub(ranked.len()),
            minimum_score,
            top_score: ranked.first().map(|e| e.strength_score),
            per_category: buckets.iter().map(|(c, v)| (*c, v.len())).collect(),
        }
    }
}
