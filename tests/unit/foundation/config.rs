use super::*;

#[test]
fn defaults_validate() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.loader.resource, "data.json");
    assert_eq!(cfg.loader.min_visible(), Duration::from_millis(800));
    assert_eq!(cfg.nav.lookahead_px, 150.0);
    assert_eq!(cfg.contact.messaging_base, "https://wa.me/");
}

#[test]
fn empty_object_is_complete() {
    let cfg = SiteConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = SiteConfig::from_json_str(r#"{ "loader": { "min_visible_ms": 1500 } }"#).unwrap();
    assert_eq!(cfg.loader.min_visible_ms, 1500);
    assert_eq!(cfg.loader.resource, "data.json");
    assert!(cfg.loader.cache_bust);
}

#[test]
fn rejects_negative_lookahead() {
    let err = SiteConfig::from_json_str(r#"{ "nav": { "lookahead_px": -1.0 } }"#).unwrap_err();
    assert!(err.to_string().contains("nav.lookahead_px"));
}

#[test]
fn rejects_messaging_base_without_trailing_slash() {
    let mut cfg = SiteConfig::default();
    // "https://wa.me" would normalize to "https://wa.me/"; a real segment keeps no slash.
    cfg.contact.messaging_base = "https://example.com/send".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_relative_messaging_base() {
    let mut cfg = SiteConfig::default();
    cfg.contact.messaging_base = "wa.me/".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_empty_resource() {
    let mut cfg = SiteConfig::default();
    cfg.loader.resource = "  ".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = SiteConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
}
