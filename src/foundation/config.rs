use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::foundation::error::{FolioError, FolioResult};

/// Placeholder portrait shown when the configured portrait fails to load.
pub const DEFAULT_PORTRAIT_FALLBACK: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Site-wide tunables.
///
/// Every field has a default, so an empty JSON object is a complete configuration.
pub struct SiteConfig {
    /// Content resource acquisition.
    pub loader: LoaderConfig,
    /// Scroll-driven navigation.
    pub nav: NavConfig,
    /// Contact deep-link composition.
    pub contact: ContactConfig,
    /// Fixed image references that do not come from the content document.
    pub images: ImageConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Content loader settings.
pub struct LoaderConfig {
    /// Relative path of the content document resource.
    pub resource: String,
    /// Append a cache-defeating query parameter to every load.
    pub cache_bust: bool,
    /// Name of the cache-defeating query parameter.
    pub cache_bust_param: String,
    /// Minimum time the loading overlay stays up after the load settles.
    pub min_visible_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resource: "data.json".to_string(),
            cache_bust: true,
            cache_bust_param: "v".to_string(),
            min_visible_ms: 800,
        }
    }
}

impl LoaderConfig {
    /// Minimum visible duration as a [`Duration`].
    pub fn min_visible(&self) -> Duration {
        Duration::from_millis(self.min_visible_ms)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Scroll spy and header settings.
pub struct NavConfig {
    /// Distance added to the scroll offset before section hit-testing.
    pub lookahead_px: f64,
    /// Scroll offset past which the top bar switches to its compact form.
    pub compact_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lookahead_px: 150.0,
            compact_after_px: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Contact deep-link settings.
pub struct ContactConfig {
    /// Messaging service base; the phone digits are appended to it.
    pub messaging_base: String,
    /// Text used in the message when the submitter leaves email empty.
    pub missing_email_placeholder: String,
    /// Blocking notice shown when a required field is empty.
    pub missing_fields_notice: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            messaging_base: "https://wa.me/".to_string(),
            missing_email_placeholder: "Not provided".to_string(),
            missing_fields_notice: "Please provide your name and project objectives.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Image references owned by the site rather than the document.
pub struct ImageConfig {
    /// Portrait shown in the about section.
    pub portrait: String,
    /// Substitute for the portrait when it fails to load.
    pub portrait_fallback: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            portrait: "/profile.jpg".to_string(),
            portrait_fallback: DEFAULT_PORTRAIT_FALLBACK.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FolioError::config(format!("parse site config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open site config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FolioError::config(format!("parse site config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges and the messaging base URL.
    pub fn validate(&self) -> FolioResult<()> {
        if self.loader.resource.trim().is_empty() {
            return Err(FolioError::config("loader.resource must be non-empty"));
        }
        if self.loader.cache_bust && self.loader.cache_bust_param.trim().is_empty() {
            return Err(FolioError::config(
                "loader.cache_bust_param must be non-empty when cache_bust is on",
            ));
        }
        for (name, value) in [
            ("nav.lookahead_px", self.nav.lookahead_px),
            ("nav.compact_after_px", self.nav.compact_after_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        let base = url::Url::parse(&self.contact.messaging_base).map_err(|e| {
            FolioError::config(format!("contact.messaging_base is not a URL: {e}"))
        })?;
        if base.cannot_be_a_base() || !base.path().ends_with('/') {
            return Err(FolioError::config(
                "contact.messaging_base must be a base URL ending in '/'",
            ));
        }
        if base.query().is_some() {
            return Err(FolioError::config(
                "contact.messaging_base must not carry a query",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
