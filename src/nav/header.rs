/// Top bar state: compact once the page has scrolled past a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    compact_after_px: f64,
    compact: bool,
}

impl HeaderState {
    /// Header that turns compact when `scroll_y > compact_after_px`.
    pub fn new(compact_after_px: f64) -> Self {
        Self {
            compact_after_px,
            compact: false,
        }
    }

    /// `true` when the compact form is shown.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Recompute from a scroll offset; returns whether the flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let compact = scroll_y > self.compact_after_px;
        let changed = compact != self.compact;
        self.compact = compact;
        changed
    }
}
