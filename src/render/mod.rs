//! Rendering module
//!
//! The controller does not draw anything itself. It exposes a `FeedView`
//! derived from the pagination state, and a `ListRenderer` turns that view
//! into output.

mod terminal;

pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::pagination::PaginationState;
use crate::types::CombinationRecord;

/// Page heading
pub const TITLE: &str = "How can you combine?";

/// Static banner shown when a fetch failed
pub const ERROR_BANNER: &str = "Something went wrong, please reload the page...";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    #[default]
    Pretty,
}

/// What a renderer should show for the current state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedView<'a> {
    /// Accumulated records
    pub items: &'a [CombinationRecord],
    /// Whether the list itself is shown
    pub show_list: bool,
    /// Whether the initial loading indicator is shown
    pub show_loader: bool,
    /// Banner to show, if any
    pub error_banner: Option<&'static str>,
    /// Whether the trailing marker is rendered
    pub show_marker: bool,
    /// Current page index
    pub page_index: u32,
    /// Current total count
    pub total_count: u64,
    /// Whether every page has been requested
    pub exhausted: bool,
}

impl<'a> FeedView<'a> {
    /// Derive the view from the pagination state.
    ///
    /// The list hides once an error is recorded; the loader only covers the
    /// empty first load; the marker follows the list whenever it has records.
    pub fn from_state(state: &'a PaginationState) -> Self {
        let has_items = !state.is_empty();
        let has_error = state.error().is_some();

        Self {
            items: state.items(),
            show_list: has_items && !has_error,
            show_loader: state.is_loading() && !has_items,
            error_banner: (!state.is_loading() && has_error).then_some(ERROR_BANNER),
            show_marker: has_items,
            page_index: state.page_index(),
            total_count: state.total_count(),
            exhausted: state.is_exhausted(),
        }
    }
}

/// Draws a feed view
pub trait ListRenderer {
    /// Render the current view
    fn render(&mut self, view: &FeedView<'_>) -> Result<()>;
}
