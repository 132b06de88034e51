//! Minimum-score filter and descending rank.

use petition_core::ScoredEvidence;

/// Keep records with `strength_score >= minimum_score`, highest first.
///
/// `sort_by` is stable, so equal scores keep their input order. An empty
/// result is not an error.
pub fn filter_and_rank(mut scored: Vec<ScoredEvidence>, minimum_score: u32) -> Vec<ScoredEvidence> {
    scored.retain(|e| e.strength_score >= minimum_score);
    scored.sort_by(|a, b| b.strength_score.cmp(&a.strength_score));
    scored
}
