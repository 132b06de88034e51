use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One hit from a web search provider.
///
/// `source` holds the provider tag (`"serp"`, `"you.com"`, `"perplexity"`),
/// not the page domain. The page address, when known, is in `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebEvidenceItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl WebEvidenceItem {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Snippet text, empty when absent.
    pub fn snippet_text(&self) -> &str {
        self.snippet.as_deref().unwrap_or("")
    }
}
