//! Atomic Toolbox core: oxford-comma sentences, image captions and write-once
//! image sitemaps.
//!
//! The two pieces that matter are [`text::ListFormatter`], which turns a raw
//! word list into a caption-ready sentence fragment, and
//! [`sitemap::SitemapWriter`], which assembles those captions into a
//! sitemap-image document and persists it at most once per target path.

pub mod config;
pub mod context;
pub mod error;
pub mod sitemap;
pub mod text;
pub mod util;

pub use config::{EmptyListPolicy, FormatterConfig, HostRewrite, SitemapConfig, ToolboxConfig};
pub use context::RenderContext;
pub use error::{Result, ToolboxError};
pub use sitemap::{ImageRecord, SitemapDocument, SitemapEntry, SitemapWriter, WriteOutcome};
pub use text::{ListFormatter, WordInput};
