use url::Url;

use crate::page::controller::Snapshot;

/// The window and view layer the page runs in.
pub trait Host {
    /// Paint `snapshot`.
    ///
    /// When `snapshot.overlay.visible` turns false the loading overlay must fade out rather than
    /// disappear. When the portrait fails to load, paint its `fallback` instead.
    fn render(&mut self, snapshot: &Snapshot);

    /// Open `url` in a new browsing context.
    fn open_external(&mut self, url: &Url);

    /// Show a blocking notice that interrupts the user.
    fn notify(&mut self, message: &str);
}
