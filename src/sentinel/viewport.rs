//! Viewport geometry
//!
//! Computes how much of the trailing marker is on screen for a simple
//! fixed-row list, so consumers without a layout engine (terminal, tests)
//! can feed the sentinel.

/// Fixed-row list layout. Units are whatever the consumer scrolls in
/// (terminal lines, pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Height of one record row
    pub row_height: u32,
    /// Height of the trailing marker (0 for an empty element)
    pub marker_height: u32,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            row_height: 1,
            marker_height: 1,
        }
    }
}

impl ListLayout {
    /// Create a layout
    pub fn new(row_height: u32, marker_height: u32) -> Self {
        Self {
            row_height,
            marker_height,
        }
    }

    /// Offset of the marker's top edge for a list of `rows` records
    pub fn marker_top(&self, rows: usize) -> u64 {
        rows as u64 * u64::from(self.row_height)
    }

    /// Total content height including the marker
    pub fn content_height(&self, rows: usize) -> u64 {
        self.marker_top(rows) + u64::from(self.marker_height)
    }
}

/// Scrollable window over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible height
    pub height: u32,
    /// Distance from the top of the content to the top of the window
    pub offset: u64,
}

impl Viewport {
    /// Create a viewport scrolled to the top
    pub fn new(height: u32) -> Self {
        Self { height, offset: 0 }
    }

    /// Largest valid offset for the given content height
    pub fn max_offset(&self, content_height: u64) -> u64 {
        content_height.saturating_sub(u64::from(self.height))
    }

    /// Scroll by `delta`, clamped to the content
    pub fn scroll_by(&mut self, delta: i64, content_height: u64) {
        let max = self.max_offset(content_height);
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.offset = target.min(max);
    }

    /// Scroll so the bottom of the content is in view
    pub fn scroll_to_end(&mut self, content_height: u64) {
        self.offset = self.max_offset(content_height);
    }

    /// Fraction of the marker inside the window, in 0.0..=1.0.
    ///
    /// A zero-height marker counts as fully visible when its position lies
    /// within the window (edges included) and invisible otherwise.
    pub fn marker_visibility(&self, layout: &ListLayout, rows: usize) -> f64 {
        let top = layout.marker_top(rows);
        let window_start = self.offset;
        let window_end = self.offset + u64::from(self.height);

        if layout.marker_height == 0 {
            return if top >= window_start && top <= window_end {
                1.0
            } else {
                0.0
            };
        }

        let bottom = top + u64::from(layout.marker_height);
        let visible_start = top.max(window_start);
        let visible_end = bottom.min(window_end);
        if visible_end <= visible_start {
            return 0.0;
        }

        (visible_end - visible_start) as f64 / f64::from(layout.marker_height)
    }
}
