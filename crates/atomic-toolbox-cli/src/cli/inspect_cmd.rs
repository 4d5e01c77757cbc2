//! `atomic-toolbox inspect <path>`: list the entries of a written sitemap.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use atomic_toolbox::sitemap::read_sitemap_file;
use atomic_toolbox::util::format::format_bytes;
use atomic_toolbox::util::pagination::{page_count, paginate, start_of_range};
use atomic_toolbox::SitemapEntry;
use std::io::Write;
use std::path::Path;

/// Print one page of sitemap entries.
pub fn run(path: &Path, page: usize, per_page: usize) -> Result<()> {
    let doc = read_sitemap_file(path)
        .with_context(|| format!("failed to read sitemap: {}", path.display()))?;
    let size = path.metadata().map(|m| m.len()).unwrap_or(0);

    let per_page = per_page.max(1);
    let page = page.max(1);
    let entries = paginate(&doc.entries, per_page, page);
    let pages = page_count(doc.len(), per_page);

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "bytes": size,
            "total": doc.len(),
            "page": page,
            "pages": pages,
            "entries": entries,
        }));
        return Ok(());
    }

    let s = Styled::new();
    eprintln!(
        "  {} {}",
        s.bold(&path.display().to_string()),
        s.dim(&format!(
            "({} entries, {}, page {page}/{pages})",
            doc.len(),
            format_bytes(size, 1)
        ))
    );

    let offset = if doc.len() > per_page {
        start_of_range(page, per_page, doc.len(), 0)
    } else {
        0
    };
    write_entries(
        &mut std::io::stdout().lock(),
        entries,
        offset,
        output::is_verbose(),
    )?;
    Ok(())
}

/// Numbered entry lines starting after `offset`, with caption and, when
/// `verbose`, page and lastmod fields.
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[SitemapEntry],
    offset: usize,
    verbose: bool,
) -> std::io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{:>4}. {}", offset + i + 1, entry.image_url)?;
        if verbose {
            output::write_field(out, "page", &entry.page_url)?;
            output::write_field(out, "lastmod", &entry.last_modified)?;
        }
        if !entry.image_caption.is_empty() {
            output::write_field(out, "title", &entry.image_caption)?;
        }
    }
    Ok(())
}
