//! Scroll sentinel module
//!
//! Detects when the consumer has scrolled to the end of the rendered list.
//!
//! # Overview
//!
//! - `VisibilityObserver` - arm/disarm/on_visible interface
//! - `ScrollSentinel` - edge-triggered observer with a visibility threshold
//! - `Viewport` / `ListLayout` - geometry for computing the marker's
//!   visible ratio without a browser

mod types;
mod viewport;

pub use types::{ScrollSentinel, SentinelSignal, VisibilityObserver};
pub use viewport::{ListLayout, Viewport};
