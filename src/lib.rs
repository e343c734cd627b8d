#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # combination-feed
//!
//! Scroll-driven infinite loading of paginated bean combination records.
//!
//! ## Features
//!
//! - **Page-index pagination**: `pageIndex`/`pageSize` requests against a
//!   `{ items, totalCount }` endpoint
//! - **Deduplicated accumulation**: records are appended in arrival order,
//!   never twice for the same `combinationId`
//! - **Scroll sentinel**: an edge-triggered observer that requests the next
//!   page when the end of the list comes into view
//! - **Request sequencing**: completions from a torn-down feed are dropped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use combination_feed::{CombinationsApi, FeedConfig, FeedController, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FeedConfig::default();
//!     let mut feed = FeedController::new(CombinationsApi::new(&config)?, &config);
//!
//!     feed.mount();
//!     feed.pump().await;
//!
//!     // Whenever the renderer reports the end-of-list marker on screen:
//!     if feed.on_visibility(1.0).is_some() {
//!         feed.pump().await;
//!     }
//!
//!     for record in feed.state().items() {
//!         println!("{}", record.label());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   ScrollSentinel ──on_visibility──▶ FeedController ──fetch_page──▶ PageSource
//!        ▲                               │    ▲                      (CombinationsApi)
//!        │ arm / disarm                  ▼    │ apply_fetch_*
//!        └────────── loading ────── PaginationState ──▶ FeedView ──▶ ListRenderer
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire and record types
pub mod types;

/// Feed configuration
pub mod config;

/// HTTP client and combinations endpoint
pub mod http;

/// Pagination state and transitions
pub mod pagination;

/// End-of-list detection
pub mod sentinel;

/// Controller tying state, sentinel and source together
pub mod feed;

/// View model and renderers
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::FeedConfig;
pub use feed::{FeedController, FeedEvent, PageSource};
pub use http::CombinationsApi;
pub use pagination::{PageRequest, PaginationState};
pub use sentinel::{ScrollSentinel, VisibilityObserver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
