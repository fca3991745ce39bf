//! Folio is the content-to-view pipeline behind a single-page portfolio site.
//!
//! The page is driven from one JSON content document:
//!
//! - Load it with a [`ContentLoader`] through any [`ContentFetch`] transport, falling back to the
//!   built-in [`fallback_document`] on any failure
//! - Project it into a [`PageView`] with [`project`]
//! - Track the active section with a [`ScrollSpy`] and build messaging deep links with
//!   [`build_contact_link`]
//! - Or let a [`PageController`] own all of the above and [`run`](PageController::run) it
//!   against a [`Host`]
//!
//! See [`guide`] for the walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod contact;
pub(crate) mod content;
pub(crate) mod loader;
pub(crate) mod nav;
pub(crate) mod page;
pub(crate) mod view;

/// Architecture and usage walkthrough.
pub mod guide;

pub use crate::foundation::config::{
    ContactConfig, DEFAULT_PORTRAIT_FALLBACK, ImageConfig, LoaderConfig, NavConfig, SiteConfig,
};
pub use crate::foundation::error::{FolioError, FolioResult};

pub use crate::contact::deeplink::{
    ContactLink, build_contact_link, compose_message, decode_component, encode_component,
    messaging_link,
};
pub use crate::contact::form::{ContactError, ContactForm, FormField};
pub use crate::content::fallback::fallback_document;
pub use crate::content::model::{
    ContentDocument, Experience, Profile, Project, SkillGroup, UrlLint,
};
pub use crate::loader::content_loader::{ContentLoader, LoadOutcome};
pub use crate::loader::fetch::{ContentFetch, DirFetcher, FetchResponse};
#[cfg(feature = "http")]
pub use crate::loader::http::HttpFetcher;
pub use crate::loader::request::ContentRequest;
pub use crate::loader::state::{LoadingOverlay, LoadingState, OVERLAY_EXIT_FADE_MS};
pub use crate::nav::header::HeaderState;
pub use crate::nav::scroll_spy::ScrollSpy;
pub use crate::nav::section::{SectionBounds, SectionKey, SectionLayout};
pub use crate::page::controller::{PageController, PageEffect, PageEvent, Snapshot};
pub use crate::page::host::Host;
pub use crate::view::model::{
    AboutView, ContactView, ExperienceView, FooterView, HeroView, ImageRef, LinkView, NavBarView,
    PageView, ProjectView, Section, SkillGroupView, SkillIcon, SkillsView, SocialLink, TabView,
    WorkView,
};
pub use crate::view::project::{ViewContext, project};
