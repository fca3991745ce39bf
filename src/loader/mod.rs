pub(crate) mod content_loader;
pub(crate) mod fetch;
#[cfg(feature = "http")]
pub(crate) mod http;
pub(crate) mod request;
pub(crate) mod state;
