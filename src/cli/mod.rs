//! CLI module
//!
//! Command-line interface for browsing the combinations feed.
//!
//! # Commands
//!
//! - `browse` - Load the feed, scrolling until every page is in
//! - `page` - Fetch a single page
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use crate::render::OutputFormat;
pub use commands::{Cli, Commands};
pub use runner::{browse, Runner};
