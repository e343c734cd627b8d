//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::FeedConfig;
use crate::error::{Error, Result, ResultExt};
use crate::feed::{FeedController, FeedEvent, PageSource};
use crate::http::CombinationsApi;
use crate::pagination::{page_limit, PageRequest};
use crate::render::{ListRenderer, OutputFormat, TerminalRenderer};
use crate::sentinel::{ListLayout, Viewport};
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Browse { scrolls, viewport } => {
                let api = CombinationsApi::new(&config)?;
                let stdout = std::io::stdout().lock();
                let mut renderer = TerminalRenderer::new(stdout, self.cli.format);
                browse(api, &config, &mut renderer, *scrolls, *viewport).await
            }
            Commands::Page { page_index } => self.page(&config, *page_index).await,
            Commands::Config => {
                print!("{}", config.to_yaml()?);
                Ok(())
            }
        }
    }

    /// Resolve the config file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<FeedConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FeedConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => FeedConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.validate()?;
        Ok(config)
    }

    async fn page(&self, config: &FeedConfig, page_index: u32) -> Result<()> {
        if page_index == 0 {
            return Err(Error::invalid_value("page_index", "pages start at 1"));
        }

        let api = CombinationsApi::new(config)?;
        let request = PageRequest::new(page_index, config.page_size);
        let page = api.get_page(request).await?;

        let mut out = std::io::stdout().lock();
        match self.cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(
                    out,
                    "Page {page_index} of {} ({} combinations)",
                    page_limit(page.total_count, config.page_size),
                    page.total_count
                )?;
                let first = request.offset();
                for (position, record) in (first + 1..).zip(&page.items) {
                    writeln!(out, "{position:>4}. {}", record.label())?;
                }
            }
        }
        Ok(())
    }
}

/// Mount a feed over `source`, then repeatedly scroll the simulated
/// viewport to the end of the list, letting the sentinel pull in pages.
///
/// Stops when every page is loaded, when a scroll produces nothing, or after
/// `max_scrolls`. Returns an error if a page failed to load.
pub async fn browse<S, R>(
    source: S,
    config: &FeedConfig,
    renderer: &mut R,
    max_scrolls: Option<usize>,
    viewport_height: u32,
) -> Result<()>
where
    S: PageSource,
    R: ListRenderer,
{
    let mut feed = FeedController::new(source, config);
    let layout = ListLayout::default();
    let mut viewport = Viewport::new(viewport_height);

    feed.mount();
    if let Some(ticket) = feed.begin_fetch() {
        renderer.render(&feed.view())?;
        let result = feed.source().fetch_page(ticket.request()).await;
        feed.complete_fetch(ticket, result);
    }
    feed.pump().await;
    renderer.render(&feed.view())?;

    let mut scrolls = 0;
    while feed.state().error().is_none() && max_scrolls.map_or(true, |max| scrolls < max) {
        let rows = feed.state().len();
        viewport.scroll_to_end(layout.content_height(rows));
        scrolls += 1;

        match feed.on_visibility(viewport.marker_visibility(&layout, rows)) {
            Some(FeedEvent::PageAdvanced { .. }) => {
                feed.pump().await;
                renderer.render(&feed.view())?;
            }
            Some(FeedEvent::Exhausted { items, total_count }) => {
                info!(items, total_count, "Reached the end of the feed");
                break;
            }
            _ => break,
        }
    }

    let failed_page = feed
        .state()
        .error()
        .map(|_| feed.state().page_index());
    feed.unmount();

    match failed_page {
        Some(page_index) => Err(Error::Other(format!(
            "Failed to load page {page_index} of the feed"
        ))),
        None => Ok(()),
    }
}
