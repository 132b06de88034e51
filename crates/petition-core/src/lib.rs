//! # petition-core
//!
//! Shared foundation for the petition evidence engine.
//!
//! - `models`: claims, web/academic evidence, evidence records, category tags
//! - `config`: immutable scoring configuration (weights, thresholds, patterns)
//! - `errors`: PetitionError, ErrorChain

pub mod config;
pub mod errors;
pub mod models;

pub use config::ScoringConfig;
pub use errors::{ErrorChain, PetitionError, PetitionResult};
pub use models::{
    AcademicEvidence, Category, Claim, ClaimType, EvidenceRecord, ScoredEvidence,
    WebEvidenceItem,
};
