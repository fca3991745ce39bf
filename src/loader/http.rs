use url::Url;

use crate::foundation::error::{FolioError, FolioResult};
use crate::loader::fetch::{ContentFetch, FetchResponse};
use crate::loader::request::ContentRequest;

/// Fetches content resources over HTTP(S) relative to a base URL.
///
/// No timeout is configured beyond the client's own defaults.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    /// Fetch relative to `base` (usually the page URL) with a default client.
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    /// Fetch relative to `base` with a caller-configured client.
    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Absolute URL for `request`.
    pub fn url_for(&self, request: &ContentRequest) -> FolioResult<Url> {
        self.base.join(&request.target()).map_err(|e| {
            FolioError::fetch(format!(
                "resolve '{}' against '{}': {e}",
                request.target(),
                self.base
            ))
        })
    }
}

impl ContentFetch for HttpFetcher {
    async fn get(&self, request: &ContentRequest) -> FolioResult<FetchResponse> {
        let url = self.url_for(request)?;
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FolioError::fetch(format!("GET {url}: {e}")))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| FolioError::fetch(format!("read body of {url}: {e}")))?;
        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loader/http.rs"]
mod tests;
