//! Read sitemap-image documents back into entries.

use super::types::{SitemapDocument, SitemapEntry};
use crate::error::Result;
use quick_xml::events::Event;
use std::path::Path;

/// Parse a sitemap-image document.
///
/// Entries come back in document order. Parsing stops at the first XML error
/// and returns whatever was read up to that point.
pub fn read_sitemap(xml: &str) -> SitemapDocument {
    let mut entries = Vec::new();
    let mut in_url = false;
    let mut current = empty_entry();
    let mut current_tag = String::new();

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "url" {
                    in_url = true;
                    current = empty_entry();
                }
                current_tag = name;
            }
            Ok(Event::Text(ref e)) => {
                if in_url {
                    let text = e.unescape().unwrap_or_default().trim().to_string();
                    match current_tag.as_str() {
                        "loc" => current.page_url = text,
                        "lastmod" => current.last_modified = text,
                        "image:loc" => current.image_url = text,
                        "image:title" => current.image_caption = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "url" && in_url {
                    entries.push(std::mem::replace(&mut current, empty_entry()));
                    in_url = false;
                }
                current_tag.clear();
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    SitemapDocument { entries }
}

/// Read and parse a sitemap file.
pub fn read_sitemap_file(path: &Path) -> Result<SitemapDocument> {
    let xml = std::fs::read_to_string(path)?;
    Ok(read_sitemap(&xml))
}

fn empty_entry() -> SitemapEntry {
    SitemapEntry {
        page_url: String::new(),
        last_modified: String::new(),
        image_url: String::new(),
        image_caption: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="/sitemap.xsl"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
        xmlns:image="http:/www.google.com/schemas/sitemap-image/1.1">
  <url>
    <loc>https://site.example/icons/</loc>
    <lastmod>2026-10-19T08:30:00+00:00</lastmod>
    <image:image>
      <image:loc>https://cdn.example/cat.png</image:loc>
      <image:title>icon related to cat &amp; dog</image:title>
      <image:caption/>
    </image:image>
  </url>
  <url>
    <loc>https://site.example/icons/</loc>
    <lastmod>2026-10-19T08:30:00+00:00</lastmod>
    <image:image>
      <image:loc>https://cdn.example/sun.png</image:loc>
      <image:title></image:title>
      <image:caption/>
    </image:image>
  </url>
</urlset>"#;

    #[test]
    fn test_read_sitemap() {
        let doc = read_sitemap(SAMPLE);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.entries[0].page_url, "https://site.example/icons/");
        assert_eq!(doc.entries[0].last_modified, "2026-10-19T08:30:00+00:00");
        assert_eq!(doc.entries[0].image_url, "https://cdn.example/cat.png");
        assert_eq!(doc.entries[0].image_caption, "icon related to cat & dog");
        assert_eq!(doc.entries[1].image_url, "https://cdn.example/sun.png");
        assert_eq!(doc.entries[1].image_caption, "");
    }

    #[test]
    fn test_read_truncated_document() {
        let cut = &SAMPLE[..SAMPLE.find("<url>\n    <loc>https://site.example/icons/</loc>\n    <lastmod>2026-10-19T08:30:00+00:00</lastmod>\n    <image:image>\n      <image:loc>https://cdn.example/sun").unwrap()];
        let doc = read_sitemap(cut);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_read_garbage() {
        assert!(read_sitemap("not xml at all").is_empty());
    }
}
