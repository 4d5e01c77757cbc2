//! Sitemap-image documents: record types, captions, XML, and write-once persistence.

pub mod caption;
pub mod reader;
pub mod types;
pub mod writer;
pub mod xml;

pub use caption::{caption_records, ImageCaption};
pub use reader::{read_sitemap, read_sitemap_file};
pub use types::{ImageId, ImageRecord, SitemapDocument, SitemapEntry};
pub use writer::{sitemap_path_for, SitemapWriter, WriteOutcome};
