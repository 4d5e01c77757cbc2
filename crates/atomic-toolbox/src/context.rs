//! Per-request render context.

use chrono::{DateTime, SecondsFormat, Utc};

/// Values that belong to one formatting/sitemap pass.
///
/// Carries the page URL the images were rendered on and the generation
/// timestamp, so nothing about the current request lives in process-wide state.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub page_url: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RenderContext {
    /// Context stamped with the current time.
    pub fn now(page_url: Option<String>) -> Self {
        Self::at(page_url, Utc::now())
    }

    /// Context with a fixed timestamp.
    pub fn at(page_url: Option<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            page_url,
            generated_at,
        }
    }

    /// `lastmod` value for sitemap entries, e.g. `2026-10-19T08:30:00+00:00`.
    pub fn lastmod(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// Record page URL when present, otherwise the context's page URL.
    pub fn resolve_page_url<'a>(&'a self, record_page_url: &'a str) -> &'a str {
        let trimmed = record_page_url.trim();
        if !trimmed.is_empty() {
            return trimmed;
        }
        self.page_url.as_deref().unwrap_or("")
    }
}
