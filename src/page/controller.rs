use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use crate::contact::deeplink::{ContactLink, build_contact_link};
use crate::contact::form::{ContactError, ContactForm, FormField};
use crate::content::fallback::fallback_document;
use crate::content::model::ContentDocument;
use crate::foundation::config::SiteConfig;
use crate::foundation::error::{FolioError, FolioResult};
use crate::loader::content_loader::{ContentLoader, LoadOutcome};
use crate::loader::state::{LoadingOverlay, LoadingState};
use crate::nav::header::HeaderState;
use crate::nav::scroll_spy::ScrollSpy;
use crate::nav::section::{SectionBounds, SectionKey};
use crate::view::model::PageView;
use crate::view::project::{ViewContext, project};

#[derive(Clone, Debug, PartialEq)]
/// Host events the page reacts to.
pub enum PageEvent {
    /// The window scrolled; `layout` holds the measured section geometry.
    Scroll {
        /// Vertical scroll offset.
        scroll_y: f64,
        /// Section bounds in document coordinates.
        layout: BTreeMap<SectionKey, SectionBounds>,
    },
    /// A bottom tab was tapped.
    TabSelected(SectionKey),
    /// A contact form input changed.
    Input {
        /// Edited field.
        field: FormField,
        /// New value.
        value: String,
    },
    /// The contact form was submitted.
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Side effects requested from the host.
pub enum PageEffect {
    /// State changed; paint a fresh [`Snapshot`].
    Render,
    /// Open `url` in a new browsing context.
    OpenExternal(Url),
    /// Show a blocking notice.
    Notice(String),
}

#[derive(Clone, Debug, PartialEq)]
/// Everything the view layer needs to paint one state of the page.
pub struct Snapshot {
    /// Projected document.
    pub view: Arc<PageView>,
    /// Loading overlay state.
    pub overlay: LoadingOverlay,
    /// Highlighted bottom tab.
    pub active_tab: SectionKey,
    /// Top bar uses its compact form.
    pub header_compact: bool,
    /// Current contact form values.
    pub form: ContactForm,
}

/// Owner of all per-page state.
///
/// Each piece of state has exactly one writer (this controller) and every mutation happens
/// synchronously inside one event turn, so no locking is involved.
#[derive(Debug)]
pub struct PageController {
    config: SiteConfig,
    ctx: ViewContext,
    document: Arc<ContentDocument>,
    view: Arc<PageView>,
    document_replaced: bool,
    loading: LoadingState,
    spy: ScrollSpy,
    header: HeaderState,
    form: ContactForm,
}

impl PageController {
    /// Page showing the fallback document, loading, on the first tab.
    pub fn new(config: SiteConfig, year: i32) -> FolioResult<Self> {
        config.validate()?;
        let ctx = ViewContext::from_config(&config, year);
        let document = fallback_document();
        let view = Arc::new(project(&document, &ctx));
        let spy = ScrollSpy::for_tabs(config.nav.lookahead_px)?;
        let header = HeaderState::new(config.nav.compact_after_px);
        Ok(Self {
            config,
            ctx,
            document,
            view,
            document_replaced: false,
            loading: LoadingState::Loading,
            spy,
            header,
            form: ContactForm::default(),
        })
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Document currently shown.
    pub fn document(&self) -> &Arc<ContentDocument> {
        &self.document
    }

    /// Projection of the current document.
    pub fn view(&self) -> &Arc<PageView> {
        &self.view
    }

    /// Loading flag.
    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    /// Highlighted bottom tab.
    pub fn active_tab(&self) -> SectionKey {
        self.spy.active()
    }

    /// Contact form values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Loader configured for this page.
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::new(self.config.loader.clone())
    }

    /// Current paintable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: Arc::clone(&self.view),
            overlay: self.loading.overlay(),
            active_tab: self.spy.active(),
            header_compact: self.header.is_compact(),
            form: self.form.clone(),
        }
    }

    /// Apply the settled load. Returns `true` when the document was replaced.
    ///
    /// The document is swapped as a whole, at most once per page.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        if self.document_replaced {
            tracing::warn!("content document already replaced; ignoring further load");
            return false;
        }
        match outcome {
            LoadOutcome::Loaded(doc) => {
                self.document = Arc::new(doc);
                self.view = Arc::new(project(&self.document, &self.ctx));
                self.document_replaced = true;
                tracing::debug!(sections = self.view.sections.len(), "page view re-projected");
                true
            }
            LoadOutcome::Fallback(_) => false,
        }
    }

    /// Dismiss the loading overlay. Returns `true` only the first time.
    pub fn finish_loading(&mut self) -> bool {
        let changed = self.loading.finish();
        if changed {
            tracing::debug!("loading overlay dismissed");
        }
        changed
    }

    /// Handle one host event synchronously.
    pub fn handle(&mut self, event: PageEvent) -> Vec<PageEffect> {
        match event {
            PageEvent::Scroll { scroll_y, layout } => {
                let before = self.spy.active();
                let active = self.spy.on_scroll(scroll_y, &layout);
                let header_changed = self.header.on_scroll(scroll_y);
                if before != active || header_changed {
                    vec![PageEffect::Render]
                } else {
                    Vec::new()
                }
            }
            PageEvent::TabSelected(key) => {
                let before = self.spy.active();
                if self.spy.select(key) != before {
                    vec![PageEffect::Render]
                } else {
                    Vec::new()
                }
            }
            PageEvent::Input { field, value } => {
                self.form.set(field, value);
                vec![PageEffect::Render]
            }
            PageEvent::Submit => self.submit(),
        }
    }

    /// Deep link for the current form and owner, without opening it.
    pub fn contact_link(&self) -> FolioResult<ContactLink> {
        let link = build_contact_link(&self.form, &self.document.profile, &self.config.contact)?;
        Ok(link)
    }

    fn submit(&self) -> Vec<PageEffect> {
        match self.contact_link() {
            Ok(link) => {
                tracing::info!(
                    message_bytes = link.message.len(),
                    "opening contact deep link"
                );
                vec![PageEffect::OpenExternal(link.url)]
            }
            Err(FolioError::Contact(ContactError::MissingRequiredField(field))) => {
                tracing::debug!(%field, "contact submission blocked");
                vec![PageEffect::Notice(
                    self.config.contact.missing_fields_notice.clone(),
                )]
            }
            Err(FolioError::Contact(err)) => {
                tracing::warn!(error = %err, "contact submission blocked");
                vec![PageEffect::Notice(err.to_string())]
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                vec![PageEffect::Notice(err.to_string())]
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
