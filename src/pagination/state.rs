//! Pagination state
//!
//! The accumulated record list plus the counters that decide whether another
//! page may be requested. Fields are only mutated through the functions in
//! `transitions`.

use crate::config::{DEFAULT_INITIAL_TOTAL_COUNT, DEFAULT_PAGE_SIZE};
use crate::types::CombinationRecord;
use std::collections::HashSet;

/// Number of pages needed to hold `total_count` records
pub fn page_limit(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size))
}

/// State of one mounted feed
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub(super) items: Vec<CombinationRecord>,
    pub(super) seen: HashSet<String>,
    pub(super) page_index: u32,
    pub(super) page_size: u32,
    pub(super) total_count: u64,
    pub(super) initial_total_count: u64,
    pub(super) loading: bool,
    pub(super) error: Option<String>,

    pub(super) session: u64,
    pub(super) next_seq: u64,
    /// Newest ticket issued; only its completion clears `loading`
    pub(super) latest_seq: Option<u64>,
    /// Ticket whose response last wrote `total_count` (0 = placeholder)
    pub(super) total_count_seq: u64,
    /// `(page_index, total_count)` of the last issued fetch
    pub(super) last_trigger: Option<(u32, u64)>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_INITIAL_TOTAL_COUNT)
    }
}

impl PaginationState {
    /// Fresh state: no items, page 1, placeholder total count
    pub fn new(page_size: u32, initial_total_count: u64) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            page_index: 1,
            page_size,
            total_count: initial_total_count,
            initial_total_count,
            loading: false,
            error: None,
            session: 0,
            next_seq: 1,
            latest_seq: None,
            total_count_seq: 0,
            last_trigger: None,
        }
    }

    /// Accumulated records in arrival order
    pub fn items(&self) -> &[CombinationRecord] {
        &self.items
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no record has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a record with this id is already in the list
    pub fn contains(&self, combination_id: &str) -> bool {
        self.seen.contains(combination_id)
    }

    /// Current 1-based page index
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Records per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Last reported total, or the placeholder before the first response
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing error message, if a fetch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current session id
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Pages needed for the current total count
    pub fn page_limit(&self) -> u64 {
        page_limit(self.total_count, self.page_size)
    }

    /// Whether the current page index is still within the reported total
    pub fn has_more(&self) -> bool {
        u64::from(self.page_index) <= self.page_limit()
    }

    /// Whether pagination is exhausted
    pub fn is_exhausted(&self) -> bool {
        !self.has_more()
    }

    /// Request for the current page index
    pub fn current_request(&self) -> super::PageRequest {
        super::PageRequest::new(self.page_index, self.page_size)
    }
}
