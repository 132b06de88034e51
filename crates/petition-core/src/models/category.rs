//! Category tags assigned during scoring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a record scored the way it did. Used to bucket ranked evidence.
///
/// `Academic` is shared by the bibliometric block and by `.edu` sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Government,
    Academic,
    Organization,
    ResearchBased,
    Recognition,
    ExpertValidated,
}

impl Category {
    /// All 6 category tags, in report order.
    pub const ALL: [Category; 6] = [
        Self::Government,
        Self::Academic,
        Self::Organization,
        Self::ResearchBased,
        Self::Recognition,
        Self::ExpertValidated,
    ];

    /// The wire label (`"research_based"`, `"expert_validated"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Academic => "academic",
            Self::Organization => "organization",
            Self::ResearchBased => "research_based",
            Self::Recognition => "recognition",
            Self::ExpertValidated => "expert_validated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
