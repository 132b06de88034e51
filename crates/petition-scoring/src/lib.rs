//! # petition-scoring
//!
//! Deterministic, rule-based scoring of evidence records.
//!
//! - `signals`: source-domain classification and snippet content indicators
//! - `scorer`: academic and expert-validation sub-scorers, the aggregate scorer
//! - `ranking`: minimum-score filter, stable ranking, category buckets
//!
//! Every operation is a pure function of its input and the scorer's
//! immutable config. No I/O, no shared mutable state.

pub mod ranking;
pub mod scorer;
pub mod signals;

pub use ranking::{categorize, filter_and_rank, CategorizedEvidence, RankingSummary};
pub use scorer::{EvidenceScorer, RecordScore, ScoreBreakdown};
pub use signals::{ContentSignalDetector, SignalHit, SourceClassifier};
