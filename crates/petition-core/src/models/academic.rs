use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Bibliographic match for a claim.
///
/// Every field defaults so a partially-filled lookup still deserializes; it is
/// then scored as present with zero-valued counts. A `null` count or author
/// list reads as its default. Counts are unsigned, so a negative count is
/// rejected when the record is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicEvidence {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    pub year: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub citation_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub influential_citation_count: u32,
    pub url: Option<String>,
}
