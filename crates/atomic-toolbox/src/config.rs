//! Toolbox configuration: defaults, JSON file, environment overrides.

use crate::error::{Result, ToolboxError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on the number of words a sentence is built from.
pub const DEFAULT_MAX_WORDS: usize = 12;
/// Default conjunction placed before the last word.
pub const DEFAULT_CONJUNCTION: &str = "and";
/// Default subject for caption sentences.
pub const DEFAULT_SUBJECT: &str = "icon";
/// Default stylesheet referenced by written sitemaps.
pub const DEFAULT_STYLESHEET_URL: &str = "/sitemap-image.xsl";

/// What a word list that tokenizes to nothing turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyListPolicy {
    /// Produce an empty sentence.
    #[default]
    EmptySentence,
    /// Report [`ToolboxError::EmptyWordList`] from the fallible entry points.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub max_words: usize,
    pub conjunction: String,
    pub empty_list: EmptyListPolicy,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            conjunction: DEFAULT_CONJUNCTION.to_string(),
            empty_list: EmptyListPolicy::default(),
        }
    }
}

/// Exact-substring host substitution applied to image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRewrite {
    pub origin: String,
    pub cdn: String,
}

impl HostRewrite {
    pub fn new(origin: impl Into<String>, cdn: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            cdn: cdn.into(),
        }
    }

    /// Replace the first occurrence of the origin host. No URL parsing.
    pub fn apply(&self, url: &str) -> String {
        if self.origin.is_empty() {
            return url.to_string();
        }
        url.replacen(&self.origin, &self.cdn, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub subject: String,
    pub stylesheet_url: String,
    pub host_rewrite: Option<HostRewrite>,
    pub directory: Option<PathBuf>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            stylesheet_url: DEFAULT_STYLESHEET_URL.to_string(),
            host_rewrite: None,
            directory: None,
        }
    }
}

/// Complete toolbox configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    pub formatter: FormatterConfig,
    pub sitemap: SitemapConfig,
}

impl ToolboxConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load a JSON config file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply `ATOMIC_TOOLBOX_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable numbers are ignored. The host rewrite is only replaced when
    /// both the origin and CDN host are supplied.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(n) = lookup("ATOMIC_TOOLBOX_MAX_WORDS").and_then(|v| v.trim().parse().ok()) {
            self.formatter.max_words = n;
        }
        if let Some(c) = lookup("ATOMIC_TOOLBOX_CONJUNCTION") {
            self.formatter.conjunction = c;
        }
        if let Some(s) = lookup("ATOMIC_TOOLBOX_SUBJECT") {
            self.sitemap.subject = s;
        }
        if let Some(url) = lookup("ATOMIC_TOOLBOX_STYLESHEET") {
            self.sitemap.stylesheet_url = url;
        }
        if let (Some(origin), Some(cdn)) = (
            lookup("ATOMIC_TOOLBOX_ORIGIN_HOST"),
            lookup("ATOMIC_TOOLBOX_CDN_HOST"),
        ) {
            self.sitemap.host_rewrite = Some(HostRewrite::new(origin, cdn));
        }
    }

    /// Reject settings the formatter and writer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.formatter.max_words == 0 {
            return Err(ToolboxError::InvalidConfig(
                "max_words must be at least 1".into(),
            ));
        }

        let conjunction = self.formatter.conjunction.trim();
        if conjunction.is_empty() {
            return Err(ToolboxError::InvalidConfig(
                "conjunction must not be empty".into(),
            ));
        }
        if conjunction.split_whitespace().count() > 1 {
            return Err(ToolboxError::InvalidConfig(format!(
                "conjunction must be a single word, got '{conjunction}'"
            )));
        }

        if let Some(rewrite) = &self.sitemap.host_rewrite {
            if rewrite.origin.trim().is_empty() {
                return Err(ToolboxError::InvalidConfig(
                    "host rewrite origin must not be empty".into(),
                ));
            }
        }

        Ok(())
    }
}
