//! Feed types
//!
//! The page source seam and the events reported by the controller.

use crate::error::Result;
use crate::pagination::PageRequest;
use crate::types::CombinationPage;
use async_trait::async_trait;

/// Anything that can produce a page of combinations
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the requested page
    async fn fetch_page(&self, request: PageRequest) -> Result<CombinationPage>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for std::sync::Arc<T> {
    async fn fetch_page(&self, request: PageRequest) -> Result<CombinationPage> {
        (**self).fetch_page(request).await
    }
}

/// Something that happened to the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A page was merged into the list
    PageLoaded {
        /// Page that was fetched
        page_index: u32,
        /// Records appended
        added: usize,
        /// Records skipped as duplicates
        duplicates: usize,
        /// Total count reported by the server
        total_count: u64,
    },
    /// A page failed to load
    FetchFailed {
        /// Page that was requested
        page_index: u32,
        /// Diagnostic description of the underlying error
        reason: String,
    },
    /// A completion arrived for a session that no longer exists
    Discarded {
        /// Page that was requested
        page_index: u32,
    },
    /// The sentinel moved the feed to the next page
    PageAdvanced {
        /// New page index
        page_index: u32,
    },
    /// The sentinel moved past the last page
    Exhausted {
        /// Records accumulated
        items: usize,
        /// Final total count
        total_count: u64,
    },
}

impl FeedEvent {
    /// Whether this event means a new page should be fetched
    pub fn is_page_advanced(&self) -> bool {
        matches!(self, Self::PageAdvanced { .. })
    }

    /// Whether this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}
