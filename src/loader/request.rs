use crate::foundation::error::{FolioError, FolioResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A request for the content document resource.
///
/// The resource is a relative path; fetchers resolve it against their own root. The optional
/// cache-busting pair is additive and ignored by static-file servers.
pub struct ContentRequest {
    resource: String,
    cache_bust: Option<(String, u64)>,
}

impl ContentRequest {
    /// Request `resource` without cache busting.
    pub fn new(resource: impl Into<String>) -> FolioResult<Self> {
        let resource = resource.into();
        if resource.trim().is_empty() {
            return Err(FolioError::validation("content resource must be non-empty"));
        }
        if resource.contains(['?', '#']) {
            return Err(FolioError::validation(
                "content resource must not carry a query or fragment",
            ));
        }
        Ok(Self {
            resource,
            cache_bust: None,
        })
    }

    /// Append `?<param>=<value>` to the request target.
    pub fn with_cache_bust(mut self, param: impl Into<String>, value: u64) -> Self {
        self.cache_bust = Some((param.into(), value));
        self
    }

    /// The relative resource path without any query.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The cache-busting parameter, if any.
    pub fn cache_bust(&self) -> Option<(&str, u64)> {
        self.cache_bust.as_ref().map(|(k, v)| (k.as_str(), *v))
    }

    /// The relative request target, including the cache-busting query.
    pub fn target(&self) -> String {
        match &self.cache_bust {
            Some((param, value)) => format!("{}?{param}={value}", self.resource),
            None => self.resource.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loader/request.rs"]
mod tests;
