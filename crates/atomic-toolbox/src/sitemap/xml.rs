//! Serialize a sitemap-image document to XML.

use super::types::SitemapDocument;
use crate::error::{Result, ToolboxError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
// Published sitemaps already carry this exact value; keep it byte-for-byte.
pub const IMAGE_NS: &str = "http:/www.google.com/schemas/sitemap-image/1.1";
pub const SCHEMA_LOCATION: &str =
    "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// Render `doc` as a UTF-8 sitemap with an XSL stylesheet instruction.
pub fn render(doc: &SitemapDocument, stylesheet_url: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    let stylesheet = format!(
        r#"xml-stylesheet type="text/xsl" href="{}""#,
        quick_xml::escape::escape(stylesheet_url)
    );
    emit(&mut writer, Event::PI(BytesPI::new(stylesheet)))?;

    let urlset = BytesStart::new("urlset").with_attributes([
        ("xmlns", SITEMAP_NS),
        ("xmlns:xsi", XSI_NS),
        ("xmlns:image", IMAGE_NS),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
    ]);
    emit(&mut writer, Event::Start(urlset))?;

    for entry in &doc.entries {
        emit(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.page_url)?;
        text_element(&mut writer, "lastmod", &entry.last_modified)?;

        emit(&mut writer, Event::Start(BytesStart::new("image:image")))?;
        text_element(&mut writer, "image:loc", &entry.image_url)?;
        text_element(&mut writer, "image:title", &entry.image_caption)?;
        emit(&mut writer, Event::Empty(BytesStart::new("image:caption")))?;
        emit(&mut writer, Event::End(BytesEnd::new("image:image")))?;

        emit(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| ToolboxError::Xml(e.to_string()))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    // Always emit the text event, even when empty, so the end tag stays inline.
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ToolboxError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::types::SitemapEntry;

    fn doc() -> SitemapDocument {
        SitemapDocument {
            entries: vec![SitemapEntry {
                page_url: "https://site.example/icons/?a=1&b=2".into(),
                last_modified: "2026-10-19T08:30:00+00:00".into(),
                image_url: "https://cdn.example/cat.png".into(),
                image_caption: "icon related to cat <and> dog".into(),
            }],
        }
    }

    #[test]
    fn test_render_prolog() {
        let xml = render(&doc(), "https://site.example/sitemap.xsl").unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(
            r#"<?xml-stylesheet type="text/xsl" href="https://site.example/sitemap.xsl"?>"#
        ));
        assert!(xml.contains(r#"xmlns:image="http:/www.google.com/schemas/sitemap-image/1.1""#));
        assert!(xml.contains(SCHEMA_LOCATION));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_entry() {
        let xml = render(&doc(), "/sitemap.xsl").unwrap();
        assert!(xml.contains("<loc>https://site.example/icons/?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<lastmod>2026-10-19T08:30:00+00:00</lastmod>"));
        assert!(xml.contains("<image:loc>https://cdn.example/cat.png</image:loc>"));
        assert!(xml.contains("<image:title>icon related to cat &lt;and&gt; dog</image:title>"));
        assert!(xml.contains("<image:caption/>"));
    }

    #[test]
    fn test_render_empty_title() {
        let mut d = doc();
        d.entries[0].image_caption.clear();
        let xml = render(&d, "/sitemap.xsl").unwrap();
        assert!(xml.contains("<image:title></image:title>"));
    }
}
