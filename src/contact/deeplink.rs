use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::Url;

use crate::contact::form::{ContactError, ContactForm};
use crate::content::model::Profile;
use crate::foundation::config::ContactConfig;
use crate::foundation::error::{FolioError, FolioResult};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the URI component unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query parameter carrying the pre-filled message.
const TEXT_PARAM: &str = "text";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A messaging deep link and the message it carries.
pub struct ContactLink {
    /// Target URL, `<base><digits>?text=<encoded message>`.
    pub url: Url,
    /// The composed message before encoding.
    pub message: String,
}

impl ContactLink {
    /// Decode the `text` parameter back out of [`ContactLink::url`].
    pub fn decoded_text(&self) -> Option<String> {
        let query = self.url.query()?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(TEXT_PARAM)?.strip_prefix('='))
            .and_then(|raw| decode_component(raw).ok())
    }
}

/// Percent-encode `text` for use as one URL query component (UTF-8).
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reverse [`encode_component`].
pub fn decode_component(encoded: &str) -> FolioResult<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| FolioError::validation(format!("encoded component is not UTF-8: {e}")))
}

/// The plain-text message sent to the site owner.
pub fn compose_message(form: &ContactForm, profile: &Profile, missing_email: &str) -> String {
    let owner = profile.name.as_deref().unwrap_or_default();
    let email = if form.email.is_empty() {
        missing_email
    } else {
        form.email.as_str()
    };
    format!(
        "Hello {owner}, I'm {name}. \n\
         I'm interested in collaborating on a project. \n\
         My email: {email}. \n\
         Brief Objectives: {objectives}",
        name = form.name,
        objectives = form.objectives,
    )
}

/// Validate the form and build the pre-filled messaging deep link.
///
/// Performs no IO; opening the link is the host's job.
pub fn build_contact_link(
    form: &ContactForm,
    profile: &Profile,
    config: &ContactConfig,
) -> Result<ContactLink, ContactError> {
    form.validate()?;
    let digits = profile
        .phone_digits()
        .ok_or(ContactError::MissingContactTarget)?;
    let message = compose_message(form, profile, &config.missing_email_placeholder);

    let mut url = messaging_url(&config.messaging_base, &digits)?;
    url.set_query(Some(&format!(
        "{TEXT_PARAM}={}",
        encode_component(&message)
    )));
    Ok(ContactLink { url, message })
}

/// Plain messaging link without a pre-filled message, or `None` without phone digits.
pub fn messaging_link(profile: &Profile, messaging_base: &str) -> Option<Url> {
    let digits = profile.phone_digits()?;
    messaging_url(messaging_base, &digits).ok()
}

fn messaging_url(base: &str, digits: &str) -> Result<Url, ContactError> {
    Url::parse(base)
        .and_then(|b| b.join(digits))
        .map_err(|e| ContactError::InvalidBase(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/contact/deeplink.rs"]
mod tests;
