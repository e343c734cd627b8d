//! Pagination module
//!
//! Page-index pagination with a server-reported total count.
//!
//! # Overview
//!
//! `PaginationState` holds the accumulated, deduplicated record list and the
//! counters that decide when another page is due. It is changed only through
//! the transition functions:
//!
//! - `begin_fetch` - issue a ticket for the current page, if one is due
//! - `apply_fetch_success` - merge a page and update the total count
//! - `apply_fetch_error` - record the fixed error message
//! - `advance_page` - move to the next page index
//! - `reset` - start a new session, orphaning in-flight fetches
//!
//! Fetching stops once `page_index > ceil(total_count / page_size)`.

mod state;
mod transitions;
mod types;

pub use state::{page_limit, PaginationState};
pub use transitions::{
    advance_page, apply_fetch_error, apply_fetch_success, begin_fetch, fetch_due, reset,
};
pub use types::{
    AdvanceOutcome, ApplyOutcome, DiscardReason, FetchTicket, PageRequest, FETCH_ERROR_MESSAGE,
};
