use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FolioError, FolioResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The complete portfolio content rendered by the page.
///
/// A document is a pure data model that is either:
/// - the compiled-in fallback (see [`crate::fallback_document`])
/// - deserialized from the fetched `data.json` payload
///
/// Only `projects` is load-bearing: a document without projects is invalid (see
/// [`ContentDocument::validate`]). Every other field may be empty, absent, or `null`.
pub struct ContentDocument {
    /// Owner identity and contact details.
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: Profile,
    /// Skill groups in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<SkillGroup>,
    /// Work history in display order (newest first by convention).
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    /// Showcased projects in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Owner identity and contact details.
pub struct Profile {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job title shown above the hero headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// One-line pitch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Free-text biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Free-text location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Messaging phone identifier; only its digits are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// Social network name (for example `github`) to profile URL.
    #[serde(
        default,
        deserialize_with = "socials_without_nulls",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub socials: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A labelled group of skills.
pub struct SkillGroup {
    /// Group label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Skill labels in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One position in the work history.
pub struct Experience {
    /// Position title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Organization name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    /// Free-text period label, for example `2020 - 2022`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    /// Free-text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A showcased project.
pub struct Project {
    /// Project title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Short description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Technology tags in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    /// Absolute URL of the cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Absolute URL the project card links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A malformed URL found by [`ContentDocument::lint`].
pub struct UrlLint {
    /// JSON-path-like location, for example `$.projects[1].url`.
    pub path: String,
    /// The offending value.
    pub value: String,
    /// Parser message.
    pub message: String,
}

impl ContentDocument {
    /// Parse a document from JSON bytes and validate it.
    pub fn from_json_slice(bytes: &[u8]) -> FolioResult<Self> {
        let doc: Self = serde_json::from_slice(bytes)
            .map_err(|e| FolioError::serde(format!("parse content document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a document from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Parse a document from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::fetch(format!("open content document '{}': {e}", path.display()))
        })?;
        let doc: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FolioError::serde(format!("parse content document '{}': {e}", path.display()))
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check the document validity rule: there is at least one project.
    pub fn validate(&self) -> FolioResult<()> {
        if self.projects.is_empty() {
            return Err(FolioError::validation(
                "content document must contain at least one project",
            ));
        }
        Ok(())
    }

    /// Report URL fields that do not parse as absolute URLs.
    ///
    /// Lints never invalidate a document; the projection renders such links as absent.
    pub fn lint(&self) -> Vec<UrlLint> {
        let mut out = Vec::new();
        for (name, value) in &self.profile.socials {
            check_url(&mut out, format!("$.profile.socials.{name}"), value);
        }
        for (i, project) in self.projects.iter().enumerate() {
            if let Some(image) = &project.image {
                check_url(&mut out, format!("$.projects[{i}].image"), image);
            }
            if let Some(url) = &project.url {
                check_url(&mut out, format!("$.projects[{i}].url"), url);
            }
        }
        out
    }
}

impl Profile {
    /// Digits of the messaging phone identifier, or `None` when there are none.
    pub fn phone_digits(&self) -> Option<String> {
        let digits: String = self
            .whatsapp
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() { None } else { Some(digits) }
    }

    /// Social URL by network name, matched case-insensitively.
    pub fn social(&self, network: &str) -> Option<&str> {
        self.socials
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(network))
            .map(|(_, v)| v.as_str())
    }
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(de)?.unwrap_or_default())
}

fn socials_without_nulls<'de, D>(de: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<String>>> = serde::Deserialize::deserialize(de)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(network, url)| Some((network, url?)))
        .collect())
}

fn check_url(out: &mut Vec<UrlLint>, path: String, value: &str) {
    if let Err(e) = url::Url::parse(value) {
        out.push(UrlLint {
            path,
            value: value.to_string(),
            message: e.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
