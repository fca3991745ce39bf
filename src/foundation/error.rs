use crate::contact::ContactError;

/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by folio APIs.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid content document, configuration value, or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// The fetch primitive failed before a response was available.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The content resource answered with a non-success status.
    #[error("fetch error: unexpected status {0}")]
    Status(u16),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while reading or validating site configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Contact form submission could not produce a deep link.
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
