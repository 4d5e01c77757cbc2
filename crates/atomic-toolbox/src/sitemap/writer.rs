//! Write-once sitemap persistence.

use super::caption::caption_record;
use super::types::{ImageRecord, SitemapDocument, SitemapEntry};
use super::xml;
use crate::config::{HostRewrite, SitemapConfig};
use crate::context::RenderContext;
use crate::error::Result;
use crate::text::ListFormatter;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a sitemap write did.
///
/// Callers treat every variant as success for control flow; the variant is there
/// for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new file was written.
    Written { entries: usize, bytes: usize },
    /// A file was already present at the target; nothing was touched.
    AlreadyExists,
    /// No records, so no file was created.
    Empty,
    /// Assembly or persistence failed and was suppressed.
    Failed(String),
}

impl WriteOutcome {
    /// Always true. A failed sitemap never fails the caller.
    pub fn is_success(&self) -> bool {
        true
    }

    pub fn wrote_file(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            WriteOutcome::Written { .. } => "written",
            WriteOutcome::AlreadyExists => "already_exists",
            WriteOutcome::Empty => "empty",
            WriteOutcome::Failed(_) => "failed",
        }
    }
}

/// Builds sitemap-image documents from image records and persists them once.
#[derive(Debug, Clone)]
pub struct SitemapWriter {
    formatter: ListFormatter,
    config: SitemapConfig,
}

impl SitemapWriter {
    pub fn new(formatter: ListFormatter, config: SitemapConfig) -> Self {
        Self { formatter, config }
    }

    pub fn formatter(&self) -> &ListFormatter {
        &self.formatter
    }

    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }

    /// Assemble entries for `records`, in order.
    pub fn build_document(&self, ctx: &RenderContext, records: &[ImageRecord]) -> SitemapDocument {
        let lastmod = ctx.lastmod();
        let entries = records
            .iter()
            .map(|record| {
                let caption = caption_record(&self.formatter, &self.config.subject, record);
                SitemapEntry {
                    page_url: ctx.resolve_page_url(&record.page_url).to_string(),
                    last_modified: lastmod.clone(),
                    image_url: rewrite_host(self.config.host_rewrite.as_ref(), &record.source_url),
                    image_caption: caption.title,
                }
            })
            .collect();

        SitemapDocument { entries }
    }

    /// Serialize a document with the configured stylesheet.
    pub fn render(&self, doc: &SitemapDocument) -> Result<String> {
        xml::render(doc, &self.config.stylesheet_url)
    }

    /// Write the sitemap for `records` to `target` unless a file is already there.
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`WriteOutcome::Failed`].
    pub fn write(&self, ctx: &RenderContext, records: &[ImageRecord], target: &Path) -> WriteOutcome {
        if target.exists() {
            debug!(path = %target.display(), "sitemap already exists, skipping");
            return WriteOutcome::AlreadyExists;
        }

        let doc = self.build_document(ctx, records);
        if doc.is_empty() {
            debug!(path = %target.display(), "no images, sitemap not written");
            return WriteOutcome::Empty;
        }

        let xml = match self.render(&doc) {
            Ok(xml) => xml,
            Err(e) => {
                warn!(path = %target.display(), "failed to render sitemap: {e}");
                return WriteOutcome::Failed(e.to_string());
            }
        };

        match persist_new(target, xml.as_bytes()) {
            Ok(()) => {
                info!(
                    path = %target.display(),
                    entries = doc.len(),
                    bytes = xml.len(),
                    "sitemap written"
                );
                WriteOutcome::Written {
                    entries: doc.len(),
                    bytes: xml.len(),
                }
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %target.display(), "sitemap created concurrently, skipping");
                WriteOutcome::AlreadyExists
            }
            Err(e) => {
                warn!(path = %target.display(), "failed to write sitemap: {e}");
                WriteOutcome::Failed(e.to_string())
            }
        }
    }
}

/// `dir/sitemap-{template}.xml`, with the template id sanitized.
pub fn sitemap_path_for(dir: &Path, template_id: &str) -> PathBuf {
    let slug = crate::text::scrub::sanitize(template_id.trim(), "-");
    dir.join(format!("sitemap-{slug}.xml"))
}

fn rewrite_host(rewrite: Option<&HostRewrite>, url: &str) -> String {
    match rewrite {
        Some(rule) => rule.apply(url),
        None => url.to_string(),
    }
}

/// Create `path` and write `bytes` in a single call. Fails if the file exists.
fn persist_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)
}
