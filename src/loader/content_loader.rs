use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::content::model::ContentDocument;
use crate::foundation::config::LoaderConfig;
use crate::foundation::error::{FolioError, FolioResult};
use crate::loader::fetch::{ContentFetch, FetchResponse};
use crate::loader::request::ContentRequest;

#[derive(Debug)]
/// Result of one load attempt.
pub enum LoadOutcome {
    /// A valid document was fetched and parsed.
    Loaded(ContentDocument),
    /// The attempt failed; the fallback document stays in place.
    Fallback(FolioError),
}

impl LoadOutcome {
    /// `true` when a document was loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The document to display: the loaded one, or `fallback`.
    pub fn into_document(self, fallback: Arc<ContentDocument>) -> Arc<ContentDocument> {
        match self {
            Self::Loaded(doc) => Arc::new(doc),
            Self::Fallback(_) => fallback,
        }
    }
}

/// Acquires the content document.
///
/// Loading never fails from the caller's point of view: every failure is logged and reported as
/// [`LoadOutcome::Fallback`]. There is no retry.
#[derive(Clone, Debug, Default)]
pub struct ContentLoader {
    config: LoaderConfig,
}

impl ContentLoader {
    /// Build a loader from its configuration section.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Request for the configured resource, cache-busted with `now_ms` when enabled.
    pub fn request(&self, now_ms: u64) -> FolioResult<ContentRequest> {
        let req = ContentRequest::new(self.config.resource.clone())?;
        if self.config.cache_bust {
            Ok(req.with_cache_bust(self.config.cache_bust_param.clone(), now_ms))
        } else {
            Ok(req)
        }
    }

    /// Request cache-busted with the current wall-clock time in milliseconds.
    pub fn request_now(&self) -> FolioResult<ContentRequest> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        self.request(now_ms)
    }

    /// Fetch, parse, and validate the content document.
    #[tracing::instrument(skip(self, fetcher))]
    pub async fn load<F: ContentFetch>(&self, fetcher: &F) -> LoadOutcome {
        match self.fetch_document(fetcher).await {
            Ok(doc) => {
                for lint in doc.lint() {
                    tracing::debug!(
                        path = %lint.path,
                        value = %lint.value,
                        "content document has a malformed URL: {}",
                        lint.message
                    );
                }
                tracing::info!(
                    projects = doc.projects.len(),
                    skills = doc.skills.len(),
                    experience = doc.experience.len(),
                    "content document loaded"
                );
                LoadOutcome::Loaded(doc)
            }
            Err(err) => {
                tracing::warn!(error = %err, "content load failed; keeping fallback document");
                LoadOutcome::Fallback(err)
            }
        }
    }

    async fn fetch_document<F: ContentFetch>(&self, fetcher: &F) -> FolioResult<ContentDocument> {
        let request = self.request_now()?;
        tracing::debug!(request = %request.target(), "fetching content document");
        let response = fetcher.get(&request).await?;
        Self::accept(response)
    }

    /// Turn a raw response into a valid document.
    pub fn accept(response: FetchResponse) -> FolioResult<ContentDocument> {
        if !response.is_success() {
            return Err(FolioError::Status(response.status));
        }
        ContentDocument::from_json_slice(&response.body)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loader/content_loader.rs"]
mod tests;
