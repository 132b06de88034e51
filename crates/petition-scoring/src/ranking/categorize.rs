//! Regroup ranked evidence by category tag.

use std::collections::BTreeMap;

use petition_core::{Category, ScoredEvidence};

/// Category → records carrying that tag, in rank order. Borrows from the
/// ranked slice; a record with several tags appears in several buckets.
pub type CategorizedEvidence<'a> = BTreeMap<Category, Vec<&'a ScoredEvidence>>;

/// Bucket ranked records by tag. Categories with no records are absent.
pub fn categorize(ranked: &[ScoredEvidence]) -> CategorizedEvidence<'_> {
    let mut buckets: CategorizedEvidence<'_> = BTreeMap::new();
    for evidence in ranked {
        for category in &evidence.categories {
            buckets.entry(*category).or_default().push(evidence);
        }
    }
    buckets
}
