use super::*;

#[test]
fn fallback_is_valid_and_fully_populated() {
    let doc = fallback_document();
    doc.validate().unwrap();
    assert!(doc.lint().is_empty());

    let p = &doc.profile;
    for field in [
        &p.name,
        &p.role,
        &p.tagline,
        &p.about,
        &p.location,
        &p.email,
        &p.whatsapp,
    ] {
        assert!(field.as_deref().is_some_and(|v| !v.is_empty()));
    }
    assert_eq!(p.socials.len(), 3);
    assert_eq!(doc.skills.len(), 3);
    assert_eq!(doc.experience.len(), 2);
    assert_eq!(doc.projects.len(), 3);
}

#[test]
fn fallback_is_shared() {
    let a = fallback_document();
    let b = fallback_document();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn fallback_survives_json_roundtrip() {
    let doc = fallback_document();
    let s = serde_json::to_string_pretty(doc.as_ref()).unwrap();
    let de = ContentDocument::from_json_str(&s).unwrap();
    assert_eq!(&de, doc.as_ref());
}
