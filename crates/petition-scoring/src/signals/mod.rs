//! Per-item signals over web evidence.

pub mod content;
pub mod source;

pub use content::ContentSignalDetector;
pub use source::SourceClassifier;

use petition_core::Category;

/// One matched signal: the tag it assigns and the weight it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalHit {
    pub category: Category,
    pub weight: u32,
}

/// Sum of hit weights.
pub fn total_weight(hits: &[SignalHit]) -> u32 {
    hits.iter().fold(0u32, |total, h| total.saturating_add(h.weight))
}
