use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::loader::fetch::ContentFetch;
use crate::page::controller::{PageController, PageEffect, PageEvent};
use crate::page::host::Host;

impl PageController {
    /// Run the page until the event channel closes.
    ///
    /// Paints the fallback immediately, then polls the single content load alongside host
    /// events on the current task. Once the load settles the document is swapped (when valid)
    /// and the loading overlay is dismissed `min_visible_ms` later. A load still in flight when
    /// the channel closes is dropped without effect.
    #[tracing::instrument(skip_all)]
    pub async fn run<F, H>(
        &mut self,
        fetcher: &F,
        mut events: mpsc::UnboundedReceiver<PageEvent>,
        host: &mut H,
    ) where
        F: ContentFetch,
        H: Host,
    {
        host.render(&self.snapshot());

        let loader = self.loader();
        let load = loader.load(fetcher);
        tokio::pin!(load);
        let mut load_pending = true;

        let reveal = tokio::time::sleep(Duration::ZERO);
        tokio::pin!(reveal);
        let mut reveal_armed = false;

        loop {
            tokio::select! {
                biased;

                outcome = &mut load, if load_pending => {
                    load_pending = false;
                    if self.apply_load(outcome) {
                        host.render(&self.snapshot());
                    }
                    reveal
                        .as_mut()
                        .reset(Instant::now() + self.config().loader.min_visible());
                    reveal_armed = true;
                }
                () = &mut reveal, if reveal_armed => {
                    reveal_armed = false;
                    if self.finish_loading() {
                        host.render(&self.snapshot());
                    }
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        tracing::debug!(load_pending, "page closed");
                        break;
                    };
                    for effect in self.handle(event) {
                        match effect {
                            PageEffect::Render => host.render(&self.snapshot()),
                            PageEffect::OpenExternal(url) => host.open_external(&url),
                            PageEffect::Notice(message) => host.notify(&message),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/run.rs"]
mod tests;
