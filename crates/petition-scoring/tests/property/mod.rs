//! Property tests: determinism, additivity, threshold, stable ranking.

use proptest::prelude::*;

use petition_core::{AcademicEvidence, ClaimType, EvidenceRecord, WebEvidenceItem};
use petition_scoring::{categorize, filter_and_rank, EvidenceScorer};

const SOURCES: [&str; 6] = ["serp", "you.com", "nih.gov", "mit.edu/x", "who.org", "perplexity"];
const SNIPPETS: [&str; 5] = [
    "",
    "study shows gains",
    "an award for the patent",
    "according to experts, recognition followed",
    "nothing relevant",
];
const VERDICTS: [&str; 5] = [
    "High confidence. Strongly supports.",
    "medium confidence, supports",
    "Low confidence",
    "unclear",
    "",
];

fn arb_web() -> impl Strategy<Value = WebEvidenceItem> {
    (0..SOURCES.len(), 0..SNIPPETS.len())
        .prop_map(|(s, n)| WebEvidenceItem::new(SOURCES[s]).with_snippet(SNIPPETS[n]))
}

fn arb_academic() -> impl Strategy<Value = Option<AcademicEvidence>> {
    proptest::option::of((0u32..200, 0u32..30, proptest::option::of(2000i32..2030)).prop_map(
        |(c, i, y)| AcademicEvidence {
            citation_count: c,
            influential_citation_count: i,
            year: y,
            ..Default::default()
        },
    ))
}

fn arb_record() -> impl Strategy<Value = EvidenceRecord> {
    (
        "[a-z ]{1,20}",
        proptest::collection::vec(arb_web(), 0..5),
        arb_academic(),
        proptest::option::of(0..VERDICTS.len()),
    )
        .prop_map(|(claim, web, academic, verdict)| EvidenceRecord {
            claim_text: claim,
            claim_type: ClaimType::Merit,
            initial_evidence: String::new(),
            web_evidence: web,
            academic_evidence: academic,
            expert_validation: verdict.map(|v| VERDICTS[v].to_string()),
        })
}

proptest! {
    #[test]
    fn scoring_is_deterministic(r in arb_record()) {
        let s = EvidenceScorer::with_defaults().unwrap();
        prop_assert_eq!(s.score(r.clone()), s.score(r));
    }

    #[test]
    fn strength_equals_breakdown_total(r in arb_record()) {
        let s = EvidenceScorer::with_defaults().unwrap();
        let assessed = s.assess(&r);
        let scored = s.score(r);
        prop_assert_eq!(scored.strength_score, assessed.breakdown.total());
        prop_assert_eq!(scored.categories, assessed.categories);
    }

    #[test]
    fn academic_block_bounded(r in arb_record()) {
        let s = EvidenceScorer::with_defaults().unwrap();
        let b = s.assess(&r).breakdown;
        prop_assert!(b.academic <= 5);
        prop_assert!(b.expert <= 5);
    }

    #[test]
    fn ranked_output_respects_threshold_and_order(
        records in proptest::collection::vec(arb_record(), 0..20),
        min in 0u32..8,
    ) {
        let s = EvidenceScorer::with_defaults().unwrap();
        let scored = s.score_batch(records);
        let expected: Vec<_> = scored.iter().filter(|e| e.strength_score >= min).cloned().collect();
        let ranked = filter_and_rank(scored, min);

        prop_assert_eq!(ranked.len(), expected.len());
        prop_assert!(ranked.iter().all(|e| e.strength_score >= min));
        prop_assert!(ranked.windows(2).all(|w| w[0].strength_score >= w[1].strength_score));

        // Stability: within a score, relative input order is preserved.
        for score in ranked.iter().map(|e| e.strength_score) {
            let from_ranked: Vec<_> = ranked.iter().filter(|e| e.strength_score == score).collect();
            let from_input: Vec<_> = expected.iter().filter(|e| e.strength_score == score).collect();
            prop_assert_eq!(from_ranked, from_input);
        }
    }

    #[test]
    fn every_tag_has_a_bucket(records in proptest::collection::vec(arb_record(), 0..20)) {
        let s = EvidenceScorer::with_defaults().unwrap();
        let ranked = filter_and_rank(s.score_batch(records), 0);
        let buckets = categorize(&ranked);
        for e in &ranked {
            for c in &e.categories {
                prop_assert!(buckets[c].iter().any(|b| std::ptr::eq(*b, e)));
            }
        }
        prop_assert!(buckets.values().all(|v| !v.is_empty()));
    }
}
