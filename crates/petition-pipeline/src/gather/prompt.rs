//! Prompt text for an expert-review collaborator backed by a language model.

use petition_core::WebEvidenceItem;

/// Build the assessment request for a claim. Asks for a support judgement and
/// an explicit High/Medium/Low confidence, which is what the expert scorer
/// looks for in the reply.
pub fn build_review_prompt(claim_text: &str, evidence: &[WebEvidenceItem]) -> String {
    let evidence_text = evidence
        .iter()
        .map(|e| format!("Source: {}\n{}", e.source, e.snippet_text()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Please analyze this claim and the supporting evidence to validate its accuracy:\n\n\
         CLAIM: {claim_text}\n\n\
         EVIDENCE:\n{evidence_text}\n\n\
         Please provide:\n\
         1. An assessment of whether the evidence supports the claim\n\
         2. Any potential gaps or limitations in the evidence\n\
         3. Overall confidence level in the claim (High/Medium/Low)\n"
    )
}
