//! Plain-text report synthesis from ranked evidence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use petition_core::{Category, ClaimType, PetitionResult, ScoredEvidence};
use petition_scoring::categorize;

/// Who the report is about and what they propose to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantInfo {
    pub name: String,
    pub field: String,
    pub endeavor_description: String,
    #[serde(default)]
    pub applications: Vec<String>,
}

impl ApplicantInfo {
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn load(path: impl AsRef<Path>) -> PetitionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }
}

/// Renders the merit/importance section of a petition from ranked evidence.
pub struct ReportBuilder<'a> {
    applicant: &'a ApplicantInfo,
    minimum_score: u32,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(applicant: &'a ApplicantInfo, minimum_score: u32) -> Self {
        Self {
            applicant,
            minimum_score,
        }
    }

    /// Sections separated by blank lines. Works for any subset of categories,
    /// including none.
    pub fn render(&self, ranked: &[ScoredEvidence]) -> String {
        let a = self.applicant;
        let mut sections = vec![
            format!(
                "Section 2. Dr. {}'s proposed endeavor has both substantial merit and national \
                 importance for the United States",
                a.name
            ),
            self.overview(),
        ];

        if ranked.is_empty() {
            sections.push(format!(
                "No evidence met the minimum strength score of {}.",
                self.minimum_score
            ));
            return sections.join("\n\n");
        }

        sections.push(format!("2.1 {} is an area of substantial merit", a.field));
        sections.extend(self.claims_of(ranked, |t| t == ClaimType::Merit));
        sections.push(format!(
            "In summary, {} is an important technology with broad impact across many \
             industries. It is of substantial merit to the United States.",
            a.field
        ));

        sections.push(format!(
            "2.2 Dr. {}'s work will be beneficial to the United States",
            a.name
        ));
        sections.extend(self.claims_of(ranked, |t| t != ClaimType::Merit));

        sections.push("2.3 Supporting evidence by category".to_string());
        let buckets = categorize(ranked);
        for category in Category::ALL {
            if let Some(records) = buckets.get(&category) {
                let mut block = format!("{} ({})", category_heading(category), records.len());
                for e in records {
                    block.push_str(&format!("\n• {} [score {}]", e.record.claim_text, e.strength_score));
                }
                sections.push(block);
            }
        }

        sections.join("\n\n")
    }

    fn overview(&self) -> String {
        let a = self.applicant;
        let mut text = format!(
            "Dr. {}'s proposed endeavor is to develop state-of-the-art {} for {}.",
            a.name, a.field, a.endeavor_description
        );
        if !a.applications.is_empty() {
            text.push_str(&format!(
                " Among other applications, Dr. {}'s work is relevant to {}, which is of \
                 substantial merit and great importance to the United States.",
                a.name,
                a.applications.join(", ")
            ));
        }
        text
    }

    fn claims_of(&self, ranked: &[ScoredEvidence], keep: impl Fn(ClaimType) -> bool) -> Vec<String> {
        ranked
            .iter()
            .filter(|e| keep(e.record.claim_type))
            .map(render_claim)
            .collect()
    }
}

fn render_claim(e: &ScoredEvidence) -> String {
    let mut block = e.record.claim_text.clone();
    if !e.record.initial_evidence.is_empty() {
        block.push(' ');
        block.push_str(&e.record.initial_evidence);
    }

    for item in e.record.web_evidence.iter().filter(|w| !w.snippet_text().is_empty()).take(2) {
        let origin = item.url.as_deref().unwrap_or(&item.source);
        block.push_str(&format!("\n  \"{}\" ({})", item.snippet_text(), origin));
    }

    if let Some(paper) = &e.record.academic_evidence {
        if let Some(title) = &paper.title {
            let year = paper.year.map(|y| format!(", {y}")).unwrap_or_default();
            block.push_str(&format!(
                "\n  {}{} (cited {} times, {} influential)",
                title, year, paper.citation_count, paper.influential_citation_count
            ));
        }
    }
    block
}

fn category_heading(category: Category) -> &'static str {
    match category {
        Category::Government => "Government sources",
        Category::Academic => "Academic sources",
        Category::Organization => "Organizational sources",
        Category::ResearchBased => "Research-based findings",
        Category::Recognition => "Patents, awards and recognition",
        Category::ExpertValidated => "Expert-validated claims",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petition_core::{AcademicEvidence, Claim, EvidenceRecord, WebEvidenceItem};

    fn applicant() -> ApplicantInfo {
        ApplicantInfo {
            name: "Rivera".to_string(),
            field: "battery chemistry".to_string(),
            endeavor_description: "grid-scale storage".to_string(),
            applications: vec!["renewables".to_string(), "EVs".to_string()],
        }
    }

    fn scored(claim: &str, claim_type: ClaimType, score: u32, tags: &[Category]) -> ScoredEvidence {
        ScoredEvidence {
            record: EvidenceRecord::for_claim(&Claim::new(claim, claim_type, "")),
            strength_score: score,
            categories: tags.iter().copied().collect(),
        }
    }

    #[test]
    fn test_empty_result_renders_note() {
        let info = applicant();
        let text = ReportBuilder::new(&info, 3).render(&[]);
        assert!(text.contains("No evidence met the minimum strength score of 3."));
        assert!(text.contains("relevant to renewables, EVs"));
        assert!(!text.contains("2.1"));
    }

    #[test]
    fn test_claims_split_by_type_and_categories_listed() {
        let info = applicant();
        let mut merit = scored("Cathode design cut cost", ClaimType::Merit, 7, &[Category::Academic]);
        merit.record.academic_evidence = Some(AcademicEvidence {
            title: Some("Cheap cathodes".to_string()),
            year: Some(2022),
            citation_count: 90,
            ..Default::default()
        });
        merit.record.web_evidence = vec![WebEvidenceItem::new("serp")
            .with_snippet("study shows")
            .with_url("https://doe.gov/x")];
        let mut importance =
            scored("Used by utilities", ClaimType::Importance, 4, &[Category::Recognition]);
        importance.record.initial_evidence = "Three grids run it.".to_string();

        let text = ReportBuilder::new(&info, 3).render(&[merit, importance]);
        let merit_at = text.find("Cathode design cut cost").unwrap();
        let benefit_at = text.find("2.2 Dr. Rivera").unwrap();
        let importance_at = text.find("Used by utilities").unwrap();
        assert!(merit_at < benefit_at && benefit_at < importance_at);
        assert!(text.contains("\"study shows\" (https://doe.gov/x)"));
        assert!(text.contains("Cheap cathodes, 2022 (cited 90 times, 0 influential)"));
        assert!(text.contains("Used by utilities Three grids run it."));
        assert!(text.contains("Academic sources (1)\n• Cathode design cut cost [score 7]"));
        assert!(text.contains("Patents, awards and recognition (1)"));
        assert!(!text.contains("Government sources"));
    }

    #[test]
    fn test_applicant_from_toml() {
        let info = ApplicantInfo::from_toml(
            "name = \"Rivera\"\nfield = \"x\"\nendeavor_description = \"y\"\n",
        )
        .unwrap();
        assert!(info.applications.is_empty());
    }
}
