//! Feed controller module
//!
//! Ties the pagination state, the scroll sentinel and a page source
//! together.
//!
//! # Overview
//!
//! The feed module provides:
//! - `FeedController` - owns the state and sentinel, issues fetches
//! - `PageSource` - async seam for whatever serves pages
//! - `FeedEvent` - what happened after each step
//!
//! A typical driver mounts the controller, calls `pump` to load whatever is
//! due, renders, and forwards marker visibility reports to `on_visibility`.

mod types;

pub use types::{FeedEvent, PageSource};

use crate::config::FeedConfig;
use crate::error::Result;
use crate::pagination::{self, AdvanceOutcome, ApplyOutcome, FetchTicket, PaginationState};
use crate::render::FeedView;
use crate::sentinel::{ScrollSentinel, VisibilityObserver};
use crate::types::CombinationPage;
use tracing::{debug, error, info, warn};

/// Drives one feed
pub struct FeedController<S> {
    source: S,
    state: PaginationState,
    sentinel: ScrollSentinel,
    mounted: bool,
    /// Loading flag the sentinel was last wired for
    observed_loading: Option<bool>,
}

impl<S: PageSource> FeedController<S> {
    /// Create an unmounted controller
    pub fn new(source: S, config: &FeedConfig) -> Self {
        Self {
            source,
            state: PaginationState::new(config.page_size, config.initial_total_count),
            sentinel: ScrollSentinel::new(config.visibility_threshold),
            mounted: false,
            observed_loading: None,
        }
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Get the sentinel
    pub fn sentinel(&self) -> &ScrollSentinel {
        &self.sentinel
    }

    /// Whether the controller is mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current view for renderers
    pub fn view(&self) -> FeedView<'_> {
        FeedView::from_state(&self.state)
    }

    /// Start with a fresh state. Remounting opens a new session, so
    /// completions of fetches issued before are dropped.
    pub fn mount(&mut self) {
        pagination::reset(&mut self.state);
        self.mounted = true;
        self.observed_loading = None;
        self.sync_sentinel();
        debug!(session = self.state.session(), "Feed mounted");
    }

    /// Tear down: disarm the sentinel and discard the state
    pub fn unmount(&mut self) {
        self.sentinel.disarm();
        self.sentinel.set_marker_present(false);
        pagination::reset(&mut self.state);
        self.mounted = false;
        self.observed_loading = None;
        debug!("Feed unmounted");
    }

    /// Issue a fetch ticket if one is due
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }

        let ticket = pagination::begin_fetch(&mut self.state)?;
        debug!(
            page_index = ticket.page_index(),
            seq = ticket.seq(),
            total_count = self.state.total_count(),
            "Fetch started"
        );
        self.sync_sentinel();
        Some(ticket)
    }

    /// Apply the result of a fetch issued by `begin_fetch`.
    ///
    /// Every error kind is collapsed into the same user-facing message; the
    /// underlying error is only logged.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<CombinationPage>,
    ) -> FeedEvent {
        let page_index = ticket.page_index();

        let event = match result {
            Ok(page) => match pagination::apply_fetch_success(&mut self.state, ticket, page) {
                ApplyOutcome::Merged { added, duplicates } => {
                    debug!(
                        page_index,
                        added,
                        duplicates,
                        total_count = self.state.total_count(),
                        "Page merged"
                    );
                    FeedEvent::PageLoaded {
                        page_index,
                        added,
                        duplicates,
                        total_count: self.state.total_count(),
                    }
                }
                _ => Self::discarded(ticket),
            },
            Err(e) => match pagination::apply_fetch_error(&mut self.state, ticket) {
                ApplyOutcome::Failed => {
                    if e.is_fetch_error() {
                        warn!(page_index, error = %e, "Failed to fetch combinations");
                    } else {
                        error!(page_index, error = %e, "Page source failed");
                    }
                    FeedEvent::FetchFailed {
                        page_index,
                        reason: e.to_string(),
                    }
                }
                _ => Self::discarded(ticket),
            },
        };

        self.sync_sentinel();
        event
    }

    /// Fetch every page that is currently due, one after another
    pub async fn pump(&mut self) -> Vec<FeedEvent> {
        let mut events = Vec::new();
        while let Some(ticket) = self.begin_fetch() {
            let result = self.source.fetch_page(ticket.request()).await;
            events.push(self.complete_fetch(ticket, result));
        }
        events
    }

    /// Forward a marker visibility report. Returns an event when the
    /// sentinel moved the page index.
    pub fn on_visibility(&mut self, ratio: f64) -> Option<FeedEvent> {
        if !self.mounted || !self.sentinel.on_visible(ratio).is_load_more() {
            return None;
        }

        match pagination::advance_page(&mut self.state) {
            AdvanceOutcome::Advanced(_) if self.state.is_exhausted() => {
                info!(
                    items = self.state.len(),
                    total_count = self.state.total_count(),
                    "All pages loaded"
                );
                Some(FeedEvent::Exhausted {
                    items: self.state.len(),
                    total_count: self.state.total_count(),
                })
            }
            AdvanceOutcome::Advanced(page_index) => {
                debug!(page_index, "Page advanced");
                Some(FeedEvent::PageAdvanced { page_index })
            }
            AdvanceOutcome::Loading | AdvanceOutcome::Exhausted => None,
        }
    }

    fn discarded(ticket: FetchTicket) -> FeedEvent {
        debug!(
            page_index = ticket.page_index(),
            session = ticket.session(),
            "Discarded completion from a previous session"
        );
        FeedEvent::Discarded {
            page_index: ticket.page_index(),
        }
    }

    fn sync_sentinel(&mut self) {
        if !self.mounted {
            return;
        }
        self.sentinel.set_marker_present(!self.state.is_empty());

        let loading = self.state.is_loading();
        if self.observed_loading != Some(loading) {
            self.sentinel.on_loading_changed(loading);
            self.observed_loading = Some(loading);
        }
    }
}

impl<S> std::fmt::Debug for FeedController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("state", &self.state)
            .field("sentinel", &self.sentinel)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
