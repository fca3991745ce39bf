use crate::foundation::error::{FolioError, FolioResult};
use crate::nav::section::{SectionKey, SectionLayout};

/// Resolves which navigation section is active from the scroll position.
///
/// Hit-testing uses `scroll_y + lookahead_px` so a section turns active slightly before its top
/// edge reaches the viewport top. The first section in list order whose bounds contain that
/// position wins; when none does, the previous answer is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<SectionKey>,
    lookahead_px: f64,
    active: SectionKey,
}

impl ScrollSpy {
    /// Spy over `sections` in the given order. The first one starts active.
    pub fn new(
        sections: impl IntoIterator<Item = SectionKey>,
        lookahead_px: f64,
    ) -> FolioResult<Self> {
        let sections: Vec<SectionKey> = sections.into_iter().collect();
        let Some(&first) = sections.first() else {
            return Err(FolioError::validation(
                "scroll spy needs at least one section",
            ));
        };
        if !lookahead_px.is_finite() || lookahead_px < 0.0 {
            return Err(FolioError::validation(
                "scroll spy lookahead must be finite and >= 0",
            ));
        }
        Ok(Self {
            sections,
            lookahead_px,
            active: first,
        })
    }

    /// Spy over the bottom tab bar sections (home, about, work, contact).
    pub fn for_tabs(lookahead_px: f64) -> FolioResult<Self> {
        Self::new(SectionKey::TABS, lookahead_px)
    }

    /// Currently active section.
    pub fn active(&self) -> SectionKey {
        self.active
    }

    /// Observed sections in hit-test order.
    pub fn sections(&self) -> &[SectionKey] {
        &self.sections
    }

    /// Recompute the active section for a scroll offset.
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, scroll_y: f64, layout: &L) -> SectionKey {
        let pos = scroll_y + self.lookahead_px;
        let hit = self
            .sections
            .iter()
            .copied()
            .find(|&key| layout.bounds(key).is_some_and(|b| b.contains(pos)));
        if let Some(key) = hit {
            self.active = key;
        }
        self.active
    }

    /// Activate `key` directly, as when its tab is tapped. Unknown keys are ignored.
    pub fn select(&mut self, key: SectionKey) -> SectionKey {
        if self.sections.contains(&key) {
            self.active = key;
        }
        self.active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/scroll_spy.rs"]
mod tests;
