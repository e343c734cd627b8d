//! State transitions
//!
//! Every mutation of `PaginationState` goes through one of these functions.
//! They do no I/O; the feed controller pairs them with the page source.

use super::state::PaginationState;
use super::types::{
    AdvanceOutcome, ApplyOutcome, DiscardReason, FetchTicket, PageRequest, FETCH_ERROR_MESSAGE,
};
use crate::types::CombinationPage;

/// Whether a fetch should be issued now.
///
/// A fetch is due when the page index is within the page limit and the
/// `(page_index, total_count)` pair differs from the one the last fetch was
/// issued for. A new total count therefore re-requests the current page.
pub fn fetch_due(state: &PaginationState) -> bool {
    state.has_more() && state.last_trigger != Some((state.page_index, state.total_count))
}

/// Start a fetch for the current page, or return `None` when none is due.
///
/// Sets `loading` and records the trigger pair so the same fetch is not
/// issued twice.
pub fn begin_fetch(state: &mut PaginationState) -> Option<FetchTicket> {
    if !fetch_due(state) {
        return None;
    }

    let seq = state.next_seq;
    state.next_seq += 1;
    state.latest_seq = Some(seq);
    state.last_trigger = Some((state.page_index, state.total_count));
    state.loading = true;

    Some(FetchTicket {
        session: state.session,
        seq,
        request: PageRequest::new(state.page_index, state.page_size),
    })
}

/// Merge a successful page into the state.
///
/// Records whose id is already present are skipped; the rest are appended
/// in response order. The total count is taken from the response unless a
/// newer fetch already reported one.
pub fn apply_fetch_success(
    state: &mut PaginationState,
    ticket: FetchTicket,
    page: CombinationPage,
) -> ApplyOutcome {
    if ticket.session != state.session {
        return ApplyOutcome::Discarded(DiscardReason::StaleSession);
    }

    let mut added = 0;
    let mut duplicates = 0;
    for record in page.items {
        if state.seen.insert(record.combination_id.clone()) {
            state.items.push(record);
            added += 1;
        } else {
            duplicates += 1;
        }
    }

    if ticket.seq >= state.total_count_seq {
        state.total_count = page.total_count;
        state.total_count_seq = ticket.seq;
    }

    settle(state, ticket);

    ApplyOutcome::Merged { added, duplicates }
}

/// Record a failed fetch. Accumulated items are left untouched.
pub fn apply_fetch_error(state: &mut PaginationState, ticket: FetchTicket) -> ApplyOutcome {
    if ticket.session != state.session {
        return ApplyOutcome::Discarded(DiscardReason::StaleSession);
    }

    state.error = Some(FETCH_ERROR_MESSAGE.to_string());
    settle(state, ticket);

    ApplyOutcome::Failed
}

/// Move to the next page. Refused while loading and once exhausted.
pub fn advance_page(state: &mut PaginationState) -> AdvanceOutcome {
    if state.loading {
        return AdvanceOutcome::Loading;
    }
    if state.is_exhausted() {
        return AdvanceOutcome::Exhausted;
    }

    state.page_index = state.page_index.saturating_add(1);
    AdvanceOutcome::Advanced(state.page_index)
}

/// Return to the freshly mounted state and open a new session. Completions
/// of fetches issued before the reset are discarded.
pub fn reset(state: &mut PaginationState) {
    let session = state.session + 1;
    *state = PaginationState::new(state.page_size, state.initial_total_count);
    state.session = session;
}

fn settle(state: &mut PaginationState, ticket: FetchTicket) {
    if state.latest_seq == Some(ticket.seq) {
        state.latest_seq = None;
        state.loading = false;
    }
}
