//! # Folio guide
//!
//! This module is a standalone walkthrough of Folio's architecture and public API.
//!
//! If you are looking for a quick start, read the repository `README.md` first.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ContentDocument`](crate::ContentDocument): everything the page says about its owner
//!   (profile, skills, experience, projects)
//! - [`ContentLoader`](crate::ContentLoader): fetches and validates one document per page
//! - [`PageView`](crate::PageView): the pure projection of a document into page sections
//! - [`ScrollSpy`](crate::ScrollSpy): which bottom tab is highlighted
//! - [`ContactLink`](crate::ContactLink): a messaging deep link composed from the contact form
//! - [`PageController`](crate::PageController): owns all per-page state and reacts to events
//!
//! The page lifecycle is explicitly staged:
//!
//! 1. Paint the [`fallback_document`](crate::fallback_document) immediately, with the loading
//!    overlay up
//! 2. Load the content document once: [`ContentLoader::load`](crate::ContentLoader::load)
//! 3. Swap the document on success and re-project:
//!    [`PageController::apply_load`](crate::PageController::apply_load)
//! 4. Drop the overlay once the minimum visible time has passed since the load settled:
//!    [`PageController::finish_loading`](crate::PageController::finish_loading)
//!
//! [`PageController::run`](crate::PageController::run) wires these steps together with host
//! events on a single task.
//!
//! ---
//!
//! ## The content document
//!
//! The document is plain JSON. Every field is optional except that `projects` must be non-empty:
//!
//! ```json
//! {
//!   "profile": {
//!     "name": "Ana Lima",
//!     "role": "Product Engineer",
//!     "whatsapp": "+55 11 90000-0000",
//!     "socials": { "github": "https://github.com/ana" }
//!   },
//!   "skills": [{ "category": "Frontend", "items": ["TypeScript"] }],
//!   "experience": [],
//!   "projects": [{ "title": "Atlas", "tech": ["Rust"], "url": "https://atlas.dev" }]
//! }
//! ```
//!
//! Parsing and validation go through
//! [`ContentDocument::from_json_slice`](crate::ContentDocument::from_json_slice), which fails with
//! [`FolioError::Serde`](crate::FolioError::Serde) for malformed JSON and
//! [`FolioError::Validation`](crate::FolioError::Validation) for an empty project list.
//!
//! URL-valued fields are not required to be well formed. Use
//! [`ContentDocument::lint`](crate::ContentDocument::lint) to list the ones that are not; the
//! projection renders them as absent (or `#` in the footer) instead of failing.
//!
//! ---
//!
//! ## Loading: silent fallback
//!
//! A [`ContentLoader`](crate::ContentLoader) issues exactly one request per load, for
//! `data.json?v=<milliseconds>` by default (see [`LoaderConfig`](crate::LoaderConfig)). The
//! transport is the [`ContentFetch`](crate::ContentFetch) trait:
//!
//! - [`DirFetcher`](crate::DirFetcher) reads from a local directory (handy for tests and static
//!   previews)
//! - `HttpFetcher` issues an HTTP GET against a base URL (behind the `http` feature)
//!
//! Any failure (transport, non-2xx status, parse, validation) yields
//! [`LoadOutcome::Fallback`](crate::LoadOutcome::Fallback). Failures are logged at `warn` through
//! `tracing` and never surface to the visitor.
//!
//! ---
//!
//! ## Loading flag and overlay timing
//!
//! [`LoadingState`](crate::LoadingState) starts `Loading` and moves to `Ready` exactly once. The
//! overlay stays visible for at least `min_visible_ms` (800 ms by default) after the load settles,
//! so a fast load never flashes. A load that never settles keeps the overlay up.
//!
//! The overlay description, [`LoadingOverlay`](crate::LoadingOverlay), carries the exit fade
//! duration; hosts fade it out rather than removing it.
//!
//! ---
//!
//! ## Navigation
//!
//! The bottom tab bar tracks four sections in order: home, about, work, contact
//! ([`SectionKey::TABS`](crate::SectionKey::TABS)). On each scroll the spy adds a fixed
//! look-ahead (150 px by default) to the scroll offset and picks the first section whose
//! half-open bounds `[top, top + height)` contain it. If none do, the previous section stays
//! active.
//!
//! Section geometry comes from the host through the
//! [`SectionLayout`](crate::SectionLayout) trait. A section the host cannot measure is skipped.
//!
//! The top bar switches to its compact form once the scroll offset passes
//! [`NavConfig::compact_after_px`](crate::NavConfig::compact_after_px).
//!
//! ---
//!
//! ## Contact deep links
//!
//! [`build_contact_link`](crate::build_contact_link) turns a
//! [`ContactForm`](crate::ContactForm) into a messaging URL:
//!
//! - name and objectives are required; an empty one yields
//!   [`ContactError::MissingRequiredField`](crate::ContactError::MissingRequiredField) and no URL
//! - an empty email is rendered as `Not provided`
//! - the message is percent-encoded with the same unreserved set as JavaScript's
//!   `encodeURIComponent`
//! - the phone is the owner's number reduced to its digits
//!
//! The result is `https://wa.me/<digits>?text=<encoded message>` with the default
//! [`ContactConfig`](crate::ContactConfig).
//!
//! ---
//!
//! ## Running a page
//!
//! A host implements [`Host`](crate::Host) (paint, open a URL, show a notice) and feeds
//! [`PageEvent`](crate::PageEvent)s through a `tokio` unbounded channel:
//!
//! ```no_run
//! use folio::{DirFetcher, Host, PageController, PageEvent, SiteConfig, Snapshot};
//!
//! struct Console;
//!
//! impl Host for Console {
//!     fn render(&mut self, snapshot: &Snapshot) {
//!         println!("loading={} tab={:?}", snapshot.overlay.visible, snapshot.active_tab);
//!     }
//!     fn open_external(&mut self, url: &url::Url) {
//!         println!("open {url}");
//!     }
//!     fn notify(&mut self, message: &str) {
//!         println!("notice: {message}");
//!     }
//! }
//!
//! # async fn demo() -> folio::FolioResult<()> {
//! let mut page = PageController::new(SiteConfig::default(), 2026)?;
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<PageEvent>();
//! drop(tx);
//! page.run(&DirFetcher::new("public"), rx, &mut Console).await;
//! # Ok(())
//! # }
//! ```
//!
//! Everything runs on the calling task. The controller is the single writer of every piece of
//! page state, so there is no locking.
