use std::collections::BTreeMap;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Sections that take part in scroll-driven navigation.
pub enum SectionKey {
    /// Hero section (`#home`).
    Home,
    /// About section (`#about`).
    About,
    /// Work section (`#work`).
    Work,
    /// Contact section (`#contact`).
    Contact,
}

impl SectionKey {
    /// The bottom tab bar order.
    pub const TABS: [SectionKey; 4] = [Self::Home, Self::About, Self::Work, Self::Contact];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor, for example `#work`.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Work => "#work",
            Self::Contact => "#contact",
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Work => "Work",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Vertical extent of a rendered section in document coordinates.
pub struct SectionBounds {
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionBounds {
    /// Bounds from `top` and `height`.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Host-measured geometry of the rendered sections.
///
/// Sections that are not rendered report `None`.
pub trait SectionLayout {
    /// Bounds of the section identified by `key`.
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds>;
}

impl SectionLayout for BTreeMap<SectionKey, SectionBounds> {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        self.get(&key).copied()
    }
}

impl SectionLayout for [(SectionKey, SectionBounds)] {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        self.iter().find(|(k, _)| *k == key).map(|(_, b)| *b)
    }
}

impl SectionLayout for Vec<(SectionKey, SectionBounds)> {
    fn bounds(&self, key: SectionKey) -> Option<SectionBounds> {
        self.as_slice().bounds(key)
    }
}
