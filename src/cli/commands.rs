//! CLI commands and argument parsing

use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse bean combinations page by page
#[derive(Parser, Debug)]
#[command(name = "combination-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the page size
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the feed and keep scrolling to the end of the list
    Browse {
        /// Stop after this many scrolls (default: until every page is loaded)
        #[arg(long)]
        scrolls: Option<usize>,

        /// Height of the simulated viewport, in rows
        #[arg(long, default_value = "20")]
        viewport: u32,
    },

    /// Fetch and print a single page
    Page {
        /// 1-based page index
        #[arg(default_value = "1")]
        page_index: u32,
    },

    /// Show the effective configuration
    Config,
}
