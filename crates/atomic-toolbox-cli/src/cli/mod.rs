//! CLI definition and subcommand implementations for the `atomic-toolbox` binary.

pub mod inspect_cmd;
pub mod output;
pub mod sentence_cmd;
pub mod settings;
pub mod sitemap_cmd;
pub mod uuid_cmd;

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "atomic-toolbox",
    version,
    about = "Oxford-comma captions and write-once image sitemaps"
)]
pub struct Cli {
    /// Config file (defaults to $ATOMIC_TOOLBOX_HOME/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and extra detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Join words into an oxford-comma sentence
    Sentence {
        /// One raw string, or several already-split words
        #[arg(required = true)]
        words: Vec<String>,

        #[arg(long)]
        conjunction: Option<String>,

        #[arg(long)]
        max_words: Option<usize>,
    },

    /// Build a "{subject} related to ..." caption
    Caption {
        subject: String,

        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print captions for every record in a JSON records file
    Captions {
        #[arg(long)]
        records: PathBuf,
    },

    /// Write an image sitemap unless one already exists
    Sitemap(SitemapArgs),

    /// List the entries of an existing sitemap
    Inspect {
        path: PathBuf,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 20)]
        per_page: usize,
    },

    /// Print a random UUID
    Uuid {
        /// Print a short 32-bit id instead
        #[arg(long)]
        short: bool,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["out", "template"])))]
pub struct SitemapArgs {
    /// JSON array of image records
    #[arg(long)]
    pub records: PathBuf,

    /// Exact output path
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Page template id; output goes to <dir>/sitemap-<template>.xml
    #[arg(long)]
    pub template: Option<String>,

    /// Output directory used with --template
    #[arg(long, requires = "template")]
    pub dir: Option<PathBuf>,

    /// Page the images appear on, for records without their own page URL
    #[arg(long)]
    pub page_url: Option<String>,

    #[arg(long)]
    pub stylesheet: Option<String>,

    #[arg(long, requires = "cdn_host")]
    pub origin_host: Option<String>,

    #[arg(long, requires = "origin_host")]
    pub cdn_host: Option<String>,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Sentence {
            words,
            conjunction,
            max_words,
        } => sentence_cmd::run_sentence(config, &words, conjunction, max_words),
        Commands::Caption { subject, words } => {
            sentence_cmd::run_caption(config, &subject, &words)
        }
        Commands::Captions { records } => sitemap_cmd::run_captions(config, &records),
        Commands::Sitemap(args) => sitemap_cmd::run(config, args),
        Commands::Inspect {
            path,
            page,
            per_page,
        } => inspect_cmd::run(&path, page, per_page),
        Commands::Uuid { short } => uuid_cmd::run(short),
    }
}
