use super::*;
use crate::contact::form::FormField;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FolioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FolioError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        FolioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(FolioError::config("x").to_string().contains("config error:"));
}

#[test]
fn status_mentions_code() {
    assert!(FolioError::Status(404).to_string().contains("404"));
}

#[test]
fn contact_errors_convert() {
    let err: FolioError = ContactError::MissingRequiredField(FormField::Name).into();
    assert!(matches!(err, FolioError::Contact(_)));
    assert!(err.to_string().contains("name"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FolioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
