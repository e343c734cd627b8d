//! Pagination types
//!
//! Requests, tickets and the outcomes reported by the state transitions.

/// Message stored in the state when a page fails to load
pub const FETCH_ERROR_MESSAGE: &str = "Error! Try again or return to home page";

/// Parameters of a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page index
    pub page_index: u32,
    /// Records per page
    pub page_size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Number of records on the pages before this one
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index.saturating_sub(1)).saturating_mul(u64::from(self.page_size))
    }
}

/// Identifies one issued fetch.
///
/// `session` changes whenever the state is reset (unmount or remount), so a
/// response that outlives its session can be recognised and dropped. `seq`
/// increases with every fetch issued within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub(super) session: u64,
    pub(super) seq: u64,
    pub(super) request: PageRequest,
}

impl FetchTicket {
    /// Session the fetch was issued in
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Sequence number within the session
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The page being requested
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Shortcut for `request().page_index`
    pub fn page_index(&self) -> u32 {
        self.request.page_index
    }
}

/// Why a completed fetch was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The state was reset after the fetch was issued
    StaleSession,
}

/// Result of applying a fetch completion to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Records merged into the list
    Merged {
        /// Records appended
        added: usize,
        /// Records skipped because their id was already present
        duplicates: usize,
    },
    /// Error recorded in the state
    Failed,
    /// Completion ignored
    Discarded(DiscardReason),
}

/// Result of a page advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Page index moved to the contained value
    Advanced(u32),
    /// A fetch is in flight; nothing changed
    Loading,
    /// Every page has already been requested; nothing changed
    Exhausted,
}
