//! Image records and sitemap documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attachment identifier, numeric or textual depending on the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Number(n) => write!(f, "{n}"),
            ImageId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ImageId {
    fn from(n: u64) -> Self {
        ImageId::Number(n)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        ImageId::Text(s.to_string())
    }
}

/// One image to catalog, built once at the boundary from attachment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub source_url: String,
    /// Explicit alt text, first in the caption fallback chain.
    #[serde(default)]
    pub alt: Option<String>,
    /// Display title, second in the caption fallback chain.
    #[serde(default)]
    pub title: Option<String>,
    /// Page the image appears on. Empty means "the page being rendered".
    #[serde(default)]
    pub page_url: String,
}

impl ImageRecord {
    pub fn new(id: impl Into<ImageId>, source_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_url: source_url.into(),
            alt: None,
            title: None,
            page_url: String::new(),
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }
}

/// One `<url>` block of a sitemap-image document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub page_url: String,
    pub last_modified: String,
    pub image_url: String,
    pub image_caption: String,
}

/// Ordered sitemap entries, in input record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapDocument {
    pub entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
