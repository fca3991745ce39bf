use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::foundation::error::{FolioError, FolioResult};
use crate::loader::request::ContentRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A raw response from the fetch primitive.
pub struct FetchResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// A `200` response with `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// An empty response with `status`.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The fetch primitive the loader is built on.
///
/// Implementations return `Err` only when no response was obtained at all (transport failure).
/// Non-success statuses are reported through [`FetchResponse::status`].
pub trait ContentFetch {
    /// Perform a `GET` for `request`.
    fn get(&self, request: &ContentRequest) -> impl Future<Output = FolioResult<FetchResponse>>;
}

/// Serves content resources from a local directory, like a static-file server.
///
/// The cache-busting query is ignored. A missing file answers `404`.
#[derive(Clone, Debug)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The served directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ContentFetch for DirFetcher {
    async fn get(&self, request: &ContentRequest) -> FolioResult<FetchResponse> {
        let rel = normalize_rel_path(request.resource())?;
        let path = self.root.join(rel);
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse::status(404)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read content resource '{}'", path.display()))
                .into()),
        }
    }
}

/// Normalize a resource path relative to a served root.
///
/// The result uses `/` separators, drops `.` segments, and rejects parent traversals (`..`).
/// A leading `/` is treated as the served root.
pub(crate) fn normalize_rel_path(source: &str) -> FolioResult<String> {
    let s = source.replace('\\', "/");
    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FolioError::validation(
                "content resource must not contain '..'",
            ));
        }
        out.push(part);
    }
    if out.is_empty() {
        return Err(FolioError::validation(
            "content resource must contain a file name",
        ));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/loader/fetch.rs"]
mod tests;
