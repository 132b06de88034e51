//! Default weights and thresholds.

pub const MINIMUM_EVIDENCE_SCORE: u32 = 3;

// Academic
pub const CITATION_THRESHOLD: u32 = 50;
pub const INFLUENTIAL_CITATION_THRESHOLD: u32 = 10;
pub const RECENT_YEAR_THRESHOLD: i32 = 2020;
pub const CITATIONS_WEIGHT: u32 = 2;
pub const INFLUENTIAL_CITATIONS_WEIGHT: u32 = 2;
pub const RECENT_PUBLICATION_WEIGHT: u32 = 1;

// Web source
pub const GOVERNMENT_WEIGHT: u32 = 3;
pub const ACADEMIC_SOURCE_WEIGHT: u32 = 2;
pub const ORGANIZATION_WEIGHT: u32 = 1;
pub const RESEARCH_INDICATORS_WEIGHT: u32 = 1;
pub const RECOGNITION_INDICATORS_WEIGHT: u32 = 2;

// Expert validation
pub const HIGH_CONFIDENCE_WEIGHT: u32 = 3;
pub const MEDIUM_CONFIDENCE_WEIGHT: u32 = 2;
pub const LOW_CONFIDENCE_WEIGHT: u32 = 1;
pub const STRONGLY_SUPPORTS_WEIGHT: u32 = 2;
pub const SUPPORTS_WEIGHT: u32 = 1;

// Source patterns
pub const GOVERNMENT_PATTERN: &str = r"\.gov$|\.gov/";
pub const ACADEMIC_PATTERN: &str = r"\.edu$|\.edu/";
pub const ORGANIZATION_PATTERN: &str = r"\.org$|\.org/";

// Content indicators
pub const RESEARCH_INDICATORS: [&str; 3] = ["study shows", "research demonstrates", "according to"];
pub const RECOGNITION_INDICATORS: [&str; 3] = ["patent", "award", "recognition"];
