//! # petition-pipeline
//!
//! Orchestration around the scoring engine: everything that talks to the
//! outside world or to the filesystem.
//!
//! - `claims`: keyword claim extraction, academic-reference detection
//! - `gather`: collaborator traits for web search, scholar lookup, expert review
//! - `checkpoint`: per-step JSON state files, isolated record loading
//! - `steps`: the validate-and-rank step and its persisted state
//! - `report`: plain-text report synthesis from ranked evidence
//! - `commands`: the `rank` and `report` commands the binary runs

pub mod checkpoint;
pub mod claims;
pub mod commands;
pub mod gather;
pub mod report;
pub mod steps;

pub use checkpoint::{load_records, parse_records, CheckpointStore};
pub use claims::{contains_academic_reference, IClaimExtractor, KeywordClaimExtractor};
pub use commands::{RankOptions, RankOutcome};
pub use gather::{EvidenceGatherer, GatherError, IExpertReview, IScholarLookup, IWebSearch, WebHit};
pub use report::{ApplicantInfo, ReportBuilder};
pub use steps::{run_validation_step, ValidationState};
