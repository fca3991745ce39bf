pub(crate) mod header;
pub(crate) mod scroll_spy;
pub(crate) mod section;
