//! `atomic-toolbox sitemap` and `atomic-toolbox captions`.

use crate::cli::output::{self, Styled};
use crate::cli::SitemapArgs;
use anyhow::{Context, Result};
use atomic_toolbox::sitemap::{caption_records, sitemap_path_for, ImageCaption};
use atomic_toolbox::util::format::format_bytes;
use atomic_toolbox::{
    HostRewrite, ImageRecord, ListFormatter, RenderContext, SitemapWriter, ToolboxConfig,
    WriteOutcome,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read a JSON array of image records.
pub fn load_records(path: &Path) -> Result<Vec<ImageRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records: {}", path.display()))?;
    let records: Vec<ImageRecord> = serde_json::from_str(&content)
        .with_context(|| format!("invalid records file: {}", path.display()))?;
    Ok(records)
}

/// Target path from `--out`, or from `--template` and the output directory.
pub fn resolve_target(args: &SitemapArgs, config: &ToolboxConfig) -> PathBuf {
    if let Some(out) = &args.out {
        return out.clone();
    }
    let dir = args
        .dir
        .clone()
        .or_else(|| config.sitemap.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    sitemap_path_for(&dir, args.template.as_deref().unwrap_or_default())
}

/// Fold sitemap flags into the config.
pub fn apply_args(config: &mut ToolboxConfig, args: &SitemapArgs) {
    if let Some(url) = &args.stylesheet {
        config.sitemap.stylesheet_url = url.clone();
    }
    if let (Some(origin), Some(cdn)) = (&args.origin_host, &args.cdn_host) {
        config.sitemap.host_rewrite = Some(HostRewrite::new(origin, cdn));
    }
}

/// Run the sitemap writer. Every outcome, failures included, exits cleanly.
pub fn run(mut config: ToolboxConfig, args: SitemapArgs) -> Result<()> {
    apply_args(&mut config, &args);
    config.validate()?;

    let records = load_records(&args.records)?;
    let target = resolve_target(&args, &config);
    let writer = SitemapWriter::new(ListFormatter::new(config.formatter), config.sitemap);
    let ctx = RenderContext::now(args.page_url.clone());

    let outcome = writer.write(&ctx, &records, &target);
    report(&outcome, &target);
    Ok(())
}

fn report(outcome: &WriteOutcome, target: &Path) {
    if output::is_json() {
        let mut value = serde_json::json!({
            "outcome": outcome.label(),
            "path": target.display().to_string(),
        });
        match outcome {
            WriteOutcome::Written { entries, bytes } => {
                value["entries"] = (*entries).into();
                value["bytes"] = (*bytes).into();
            }
            WriteOutcome::Failed(reason) => {
                value["reason"] = reason.clone().into();
            }
            WriteOutcome::AlreadyExists | WriteOutcome::Empty => {}
        }
        output::print_json(&value);
        return;
    }

    if output::is_quiet() {
        return;
    }

    let s = Styled::new();
    match outcome {
        WriteOutcome::Written { entries, bytes } => {
            eprintln!(
                "  {} Wrote {} ({entries} image(s), {}).",
                s.ok_sym(),
                s.green(&target.display().to_string()),
                format_bytes(*bytes as u64, 1)
            );
        }
        WriteOutcome::AlreadyExists => {
            eprintln!(
                "  {} Sitemap already exists at {}; left untouched.",
                s.warn_sym(),
                s.yellow(&target.display().to_string())
            );
        }
        WriteOutcome::Empty => {
            eprintln!("  {} No images; nothing written.", s.warn_sym());
        }
        WriteOutcome::Failed(reason) => {
            eprintln!(
                "  {} Sitemap not written: {}",
                s.fail_sym(),
                s.red(reason)
            );
        }
    }
}

/// Print the caption set for every record.
pub fn run_captions(config: ToolboxConfig, records_path: &Path) -> Result<()> {
    config.validate()?;
    let records = load_records(records_path)?;
    let formatter = ListFormatter::new(config.formatter);
    let captions = caption_records(&formatter, &config.sitemap.subject, &records);

    if output::is_json() {
        output::print_json(&serde_json::to_value(&captions)?);
        return Ok(());
    }

    write_captions(&mut std::io::stdout().lock(), &Styled::for_stdout(), &captions)?;
    Ok(())
}

/// One block per caption: the record id, then its title and alt lines.
pub fn write_captions<W: Write>(
    out: &mut W,
    s: &Styled,
    captions: &[ImageCaption],
) -> std::io::Result<()> {
    for caption in captions {
        writeln!(out, "{}", s.bold(&caption.id.to_string()))?;
        output::write_field(out, "title", &caption.title)?;
        output::write_field(out, "alt", &caption.alt)?;
    }
    Ok(())
}
