//! Filter & rank, categorization, and batch summaries.

pub mod categorize;
pub mod filter;
pub mod summary;

pub use categorize::{categorize, CategorizedEvidence};
pub use filter::filter_and_rank;
pub use summary::RankingSummary;
