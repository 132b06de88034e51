//! Claim extraction from personal-statement text.

use petition_core::{Claim, ClaimType};

const MERIT_KEYWORDS: [&str; 7] = [
    "merit",
    "valuable",
    "significant",
    "achievement",
    "impact",
    "advance",
    "improve",
];

const IMPORTANCE_KEYWORDS: [&str; 7] = [
    "national",
    "importance",
    "benefit",
    "united states",
    "country",
    "public",
    "society",
];

const ACADEMIC_KEYWORDS: [&str; 9] = [
    "paper",
    "research",
    "study",
    "journal",
    "publication",
    "published",
    "doi",
    "arxiv",
    "conference",
];

/// Turns raw statement text into claims. Implementations may call out to a
/// language model; the keyword extractor below needs nothing external.
pub trait IClaimExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Claim>;
}

/// Sentence-level keyword matcher.
///
/// A sentence mentioning any merit keyword is a `Merit` claim; otherwise one
/// mentioning an importance keyword is an `Importance` claim. The sentence
/// after it becomes the claim's initial evidence.
#[derive(Debug, Clone, Default)]
pub struct KeywordClaimExtractor;

impl IClaimExtractor for KeywordClaimExtractor {
    fn extract(&self, text: &str) -> Vec<Claim> {
        let sentences = split_sentences(text);
        let mut claims = Vec::new();

        for (i, sentence) in sentences.iter().enumerate() {
            let lower = sentence.to_lowercase();
            let claim_type = if contains_any(&lower, &MERIT_KEYWORDS) {
                ClaimType::Merit
            } else if contains_any(&lower, &IMPORTANCE_KEYWORDS) {
                ClaimType::Importance
            } else {
                continue;
            };
            let evidence = sentences.get(i + 1).copied().unwrap_or("");
            claims.push(Claim::new(*sentence, claim_type, evidence));
        }

        tracing::debug!(sentences = sentences.len(), claims = claims.len(), "claims extracted");
        claims
    }
}

/// Whether a claim cites scholarly work and deserves a bibliographic lookup.
pub fn contains_academic_reference(text: &str) -> bool {
    contains_any(&text.to_lowercase(), &ACADEMIC_KEYWORDS)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Split on `.`, `!` and `?` followed by whitespace or end of text.
/// Trimmed, empty pieces dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                let end = idx + ch.len_utf8();
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
