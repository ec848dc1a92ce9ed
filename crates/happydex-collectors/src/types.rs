use happydex_core::Source;
use serde::Serialize;
use serde_json::{Map, Value};

/// One text pulled from a source, ready to be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedPost {
    /// Identifier assigned by the origin, or a synthetic one for pooled posts.
    pub id: String,
    pub source: Source,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source-specific fields (`subreddit`, `instance`, `keyword`, ...).
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl CollectedPost {
    pub(crate) fn new(id: impl Into<String>, source: Source, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source,
            text: text.into(),
            url: None,
            metadata: Map::new(),
        }
    }

    pub(crate) fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.url = Some(url);
        }
        self
    }

    pub(crate) fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Posts shorter than this (in characters) carry too little text to score.
pub(crate) const MIN_TEXT_CHARS: usize = 10;
