use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use super::*;
use crate::content::fallback::fallback_document;
use crate::contact::form::FormField;
use crate::foundation::config::SiteConfig;
use crate::foundation::error::{FolioError, FolioResult};
use crate::loader::fetch::FetchResponse;
use crate::loader::request::ContentRequest;
use crate::nav::section::{SectionBounds, SectionKey};
use crate::page::controller::Snapshot;

enum Script {
    Respond(Duration, Option<FetchResponse>),
    Hang,
}

impl ContentFetch for Script {
    async fn get(&self, _request: &ContentRequest) -> FolioResult<FetchResponse> {
        match self {
            Self::Respond(delay, response) => {
                tokio::time::sleep(*delay).await;
                response
                    .clone()
                    .ok_or_else(|| FolioError::fetch("network unreachable"))
            }
            Self::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct Recorder {
    renders: Vec<(Duration, Snapshot)>,
    opened: Vec<Url>,
    notices: Vec<String>,
    start: Option<Instant>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    fn first_ready_at(&self) -> Option<Duration> {
        self.renders
            .iter()
            .find(|(_, snap)| !snap.overlay.visible)
            .map(|(at, _)| *at)
    }
}

impl Host for Recorder {
    fn render(&mut self, snapshot: &Snapshot) {
        let at = self.start.map(|s| s.elapsed()).unwrap_or_default();
        self.renders.push((at, snapshot.clone()));
    }

    fn open_external(&mut self, url: &Url) {
        self.opened.push(url.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

const VALID: &str = r#"{
    "profile": { "name": "Ana", "whatsapp": "+1 555 000 1111" },
    "projects": [ { "title": "Shop" } ]
}"#;

async fn close_after(tx: mpsc::UnboundedSender<PageEvent>, after: Duration) {
    tokio::time::sleep(after).await;
    drop(tx);
}

#[tokio::test(start_paused = true)]
async fn fast_load_keeps_overlay_for_min_visible() {
    let mut page = PageController::new(SiteConfig::default(), 2026).unwrap();
    let fetcher = Script::Respond(
        Duration::from_millis(10),
        Some(FetchResponse::ok(VALID)),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let mut host = Recorder::new();

    tokio::join!(
        page.run(&fetcher, rx, &mut host),
        close_after(tx, Duration::from_secs(3))
    );

    let (at, first) = &host.renders[0];
    assert_eq!(*at, Duration::ZERO);
    assert!(first.overlay.visible);
    assert_eq!(first.view.nav.brand, fallback_document().profile.name);

    let ready_at = host.first_ready_at().unwrap();
    assert!(ready_at >= Duration::from_millis(810), "{ready_at:?}");
    assert!(ready_at < Duration::from_millis(900), "{ready_at:?}");

    let ready_renders = host
        .renders
        .windows(2)
        .filter(|w| w[0].1.overlay.visible && !w[1].1.overlay.visible)
        .count();
    assert_eq!(ready_renders, 1);

    assert_eq!(page.document().profile.name.as_deref(), Some("Ana"));
    assert!(!page.loading().is_loading());
}

#[tokio::test(start_paused = true)]
async fn slow_load_dismisses_overlay_after_settle() {
    let mut page = PageController::new(SiteConfig::default(), 2026).unwrap();
    let fetcher = Script::Respond(
        Duration::from_millis(2000),
        Some(FetchResponse::ok(VALID)),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let mut host = Recorder::new();

    tokio::join!(
        page.run(&fetcher, rx, &mut host),
        close_after(tx, Duration::from_secs(5))
    );

    let ready_at = host.first_ready_at().unwrap();
    assert!(ready_at >= Duration::from_millis(2800), "{ready_at:?}");
    let swapped = host
        .renders
        .iter()
        .find(|(_, snap)| snap.view.nav.brand.as_deref() == Some("Ana"))
        .unwrap();
    assert!(swapped.1.overlay.visible);
}

#[tokio::test(start_paused = true)]
async fn hung_load_keeps_overlay_up() {
    let mut page = PageController::new(SiteConfig::default(), 2026).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut host = Recorder::new();

    tokio::join!(
        page.run(&Script::Hang, rx, &mut host),
        close_after(tx, Duration::from_secs(60))
    );

    assert!(host.renders.iter().all(|(_, snap)| snap.overlay.visible));
    assert!(page.loading().is_loading());
    assert!(Arc::ptr_eq(page.document(), &fallback_document()));
}

#[tokio::test(start_paused = true)]
async fn failed_loads_keep_fallback_and_still_finish() {
    for response in [
        None,
        Some(FetchResponse::status(404)),
        Some(FetchResponse::ok("not json")),
        Some(FetchResponse::ok(r#"{"projects":[]}"#)),
    ] {
        let mut page = PageController::new(SiteConfig::default(), 2026).unwrap();
        let fetcher = Script::Respond(Duration::from_millis(5), response);
        let (tx, rx) = mpsc::unbounded_channel();
        let mut host = Recorder::new();

        tokio::join!(
            page.run(&fetcher, rx, &mut host),
            close_after(tx, Duration::from_secs(2))
        );

        assert!(Arc::ptr_eq(page.document(), &fallback_document()));
        assert!(!page.loading().is_loading());
        assert!(host.first_ready_at().unwrap() >= Duration::from_millis(805));
    }
}

#[tokio::test(start_paused = true)]
async fn events_are_dispatched_to_host() {
    let mut page = PageController::new(SiteConfig::default(), 2026).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut host = Recorder::new();

    let driver = async move {
        tx.send(PageEvent::Submit).unwrap();
        tx.send(PageEvent::Input {
            field: FormField::Name,
            value: "Ana".to_string(),
        })
        .unwrap();
        tx.send(PageEvent::Input {
            field: FormField::Objectives,
            value: "Landing page".to_string(),
        })
        .unwrap();
        tx.send(PageEvent::Scroll {
            scroll_y: 900.0,
            layout: BTreeMap::from([
                (SectionKey::Home, SectionBounds::new(0.0, 900.0)),
                (SectionKey::About, SectionBounds::new(900.0, 900.0)),
            ]),
        })
        .unwrap();
        tx.send(PageEvent::Submit).unwrap();
    };

    tokio::join!(page.run(&Script::Hang, rx, &mut host), driver);

    assert_eq!(
        host.notices,
        vec!["Please provide your name and project objectives.".to_string()]
    );
    assert_eq!(host.opened.len(), 1);
    assert_eq!(host.opened[0].host_str(), Some("wa.me"));
    assert_eq!(page.active_tab(), SectionKey::About);
    let last = &host.renders.last().unwrap().1;
    assert!(last.header_compact);
    assert_eq!(last.form.get(FormField::Objectives), "Landing page");
}
