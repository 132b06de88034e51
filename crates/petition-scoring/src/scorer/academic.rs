//! Bibliometric contribution: three independent threshold tests.

use petition_core::config::AcademicConfig;
use petition_core::AcademicEvidence;

/// Score an academic block. With default weights the result is one of
/// {0, 1, 2, 3, 4, 5}. A missing year counts as 0 and fails the recency test.
/// Sums saturate at `u32::MAX`.
pub fn score_academic(evidence: &AcademicEvidence, config: &AcademicConfig) -> u32 {
    let mut score: u32 = 0;

    if evidence.citation_count > config.citation_threshold {
        score = score.saturating_add(config.citations);
    }
    if evidence.influential_citation_count > config.influential_citation_threshold {
        score = score.saturating_add(config.influential_citations);
    }
    if evidence.year.unwrap_or(0) >= config.recent_year_threshold {
        score = score.saturating_add(config.recent_publication);
    }

    score
}
