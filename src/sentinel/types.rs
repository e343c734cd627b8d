//! Sentinel types
//!
//! The observer trait and the scroll sentinel that implements it.

use crate::config::DEFAULT_VISIBILITY_THRESHOLD;
use tracing::debug;

/// What a visibility report produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelSignal {
    /// The marker crossed the threshold while armed: load the next page
    LoadMore,
    /// Nothing to do
    Idle,
}

impl SentinelSignal {
    /// Whether the next page should be requested
    pub fn is_load_more(&self) -> bool {
        matches!(self, Self::LoadMore)
    }
}

/// Observes the visibility of a trailing marker element
pub trait VisibilityObserver {
    /// Start observing. A fresh observation treats the marker as not yet
    /// seen, so a marker that is already on screen fires on the next report.
    fn arm(&mut self);

    /// Stop observing; reports are ignored until re-armed
    fn disarm(&mut self);

    /// Whether reports are currently acted on
    fn is_armed(&self) -> bool;

    /// Report the fraction (0.0..=1.0) of the marker that is on screen
    fn on_visible(&mut self, ratio: f64) -> SentinelSignal;
}

/// Fires once each time the trailing marker becomes fully visible.
///
/// Armed only while no fetch is in flight, and only acts when the marker is
/// actually rendered (at least one record loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSentinel {
    threshold: f64,
    armed: bool,
    marker_present: bool,
    /// Whether the last report since arming was above the threshold
    visible: bool,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl ScrollSentinel {
    /// Create a disarmed sentinel with the given visibility threshold
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(f64::MIN_POSITIVE, 1.0),
            armed: false,
            marker_present: false,
            visible: false,
        }
    }

    /// Visibility threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the marker is rendered
    pub fn marker_present(&self) -> bool {
        self.marker_present
    }

    /// Show or hide the marker. The marker follows the last record, so it
    /// exists only once the list is non-empty.
    pub fn set_marker_present(&mut self, present: bool) {
        if self.marker_present != present {
            self.visible = false;
        }
        self.marker_present = present;
    }

    /// Re-wire the observation after the loading flag changed: the previous
    /// observation is always torn down, and a new one is started only when
    /// no fetch is in flight.
    pub fn on_loading_changed(&mut self, loading: bool) {
        self.disarm();
        if !loading {
            self.arm();
        }
    }
}

impl VisibilityObserver for ScrollSentinel {
    fn arm(&mut self) {
        self.armed = true;
        self.visible = false;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.visible = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn on_visible(&mut self, ratio: f64) -> SentinelSignal {
        if !self.armed || !self.marker_present {
            return SentinelSignal::Idle;
        }

        let now_visible = ratio >= self.threshold;
        let crossed = now_visible && !self.visible;
        self.visible = now_visible;

        if crossed {
            debug!(ratio, "Sentinel marker fully visible");
            SentinelSignal::LoadMore
        } else {
            SentinelSignal::Idle
        }
    }
}
