//! Claims extracted from a personal statement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which eligibility prong a claim speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Merit,
    Importance,
    Background,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merit => f.write_str("merit"),
            Self::Importance => f.write_str("importance"),
            Self::Background => f.write_str("background"),
        }
    }
}

/// A discrete assertion pulled from source text. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_text: String,
    pub claim_type: ClaimType,
    /// Supporting text found next to the claim; empty when none.
    #[serde(default)]
    pub initial_evidence: String,
}

impl Claim {
    pub fn new(
        claim_text: impl Into<String>,
        claim_type: ClaimType,
        initial_evidence: impl Into<String>,
    ) -> Self {
        Self {
            claim_text: claim_text.into(),
            claim_type,
            initial_evidence: initial_evidence.into(),
        }
    }
}
