use super::*;
use crate::foundation::config::NavConfig;

fn page() -> PageController {
    PageController::new(SiteConfig::default(), 2026).unwrap()
}

fn loaded(json: &str) -> LoadOutcome {
    LoadOutcome::Loaded(ContentDocument::from_json_str(json).unwrap())
}

fn layout() -> BTreeMap<SectionKey, SectionBounds> {
    BTreeMap::from([
        (SectionKey::Home, SectionBounds::new(0.0, 800.0)),
        (SectionKey::About, SectionBounds::new(800.0, 900.0)),
        (SectionKey::Work, SectionBounds::new(1700.0, 1200.0)),
        (SectionKey::Contact, SectionBounds::new(2900.0, 700.0)),
    ])
}

fn fill_form(page: &mut PageController) {
    page.handle(PageEvent::Input {
        field: FormField::Name,
        value: "Ana".to_string(),
    });
    page.handle(PageEvent::Input {
        field: FormField::Objectives,
        value: "A shop".to_string(),
    });
}

#[test]
fn new_page_shows_fallback_while_loading() {
    let page = page();
    assert!(Arc::ptr_eq(page.document(), &fallback_document()));
    assert!(page.loading().is_loading());

    let snap = page.snapshot();
    assert!(snap.overlay.visible);
    assert_eq!(snap.active_tab, SectionKey::Home);
    assert!(!snap.header_compact);
    assert_eq!(snap.form, ContactForm::default());
    assert_eq!(
        snap.view.nav.brand.as_deref(),
        fallback_document().profile.name.as_deref()
    );
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SiteConfig {
        nav: NavConfig {
            lookahead_px: f64::NAN,
            ..NavConfig::default()
        },
        ..SiteConfig::default()
    };
    assert!(PageController::new(cfg, 2026).is_err());
}

#[test]
fn loaded_document_replaces_fallback_once() {
    let mut page = page();
    assert!(page.apply_load(loaded(
        r#"{"profile":{"name":"Ana"},"projects":[{"title":"One"}]}"#
    )));
    assert_eq!(page.document().profile.name.as_deref(), Some("Ana"));
    assert_eq!(page.view().nav.brand.as_deref(), Some("Ana"));
    assert_eq!(page.view().work().unwrap().projects.len(), 1);

    assert!(!page.apply_load(loaded(
        r#"{"profile":{"name":"Bea"},"projects":[{"title":"Two"}]}"#
    )));
    assert_eq!(page.document().profile.name.as_deref(), Some("Ana"));
}

#[test]
fn failed_load_keeps_fallback() {
    let mut page = page();
    let before = Arc::clone(page.view());
    assert!(!page.apply_load(LoadOutcome::Fallback(
        FolioError::Status(404)
    )));
    assert!(Arc::ptr_eq(page.document(), &fallback_document()));
    assert!(Arc::ptr_eq(page.view(), &before));
}

#[test]
fn loading_finishes_exactly_once() {
    let mut page = page();
    assert!(page.finish_loading());
    assert!(!page.finish_loading());
    assert!(!page.snapshot().overlay.visible);
}

#[test]
fn scroll_updates_active_tab_and_header() {
    let mut page = page();
    let layout = layout();

    let effects = page.handle(PageEvent::Scroll {
        scroll_y: 10.0,
        layout: layout.clone(),
    });
    assert!(effects.is_empty());

    let effects = page.handle(PageEvent::Scroll {
        scroll_y: 700.0,
        layout: layout.clone(),
    });
    assert_eq!(effects, vec![PageEffect::Render]);
    assert_eq!(page.active_tab(), SectionKey::About);
    assert!(page.snapshot().header_compact);

    // Past the last section nothing matches, so About stays active.
    let effects = page.handle(PageEvent::Scroll {
        scroll_y: 5000.0,
        layout,
    });
    assert!(effects.is_empty());
    assert_eq!(page.active_tab(), SectionKey::About);
}

#[test]
fn scroll_with_missing_layout_keeps_active_tab() {
    let mut page = page();
    page.handle(PageEvent::TabSelected(SectionKey::Work));
    let effects = page.handle(PageEvent::Scroll {
        scroll_y: 0.0,
        layout: BTreeMap::new(),
    });
    assert!(effects.is_empty());
    assert_eq!(page.active_tab(), SectionKey::Work);
}

#[test]
fn tab_selection_renders_only_on_change() {
    let mut page = page();
    assert_eq!(
        page.handle(PageEvent::TabSelected(SectionKey::Contact)),
        vec![PageEffect::Render]
    );
    assert!(page.handle(PageEvent::TabSelected(SectionKey::Contact)).is_empty());
    assert_eq!(page.active_tab(), SectionKey::Contact);
}

#[test]
fn input_updates_form() {
    let mut page = page();
    let effects = page.handle(PageEvent::Input {
        field: FormField::Email,
        value: "ana@example.com".to_string(),
    });
    assert_eq!(effects, vec![PageEffect::Render]);
    assert_eq!(page.form().get(FormField::Email), "ana@example.com");
}

#[test]
fn submit_with_missing_fields_shows_notice() {
    let mut page = page();
    assert_eq!(
        page.handle(PageEvent::Submit),
        vec![PageEffect::Notice(
            "Please provide your name and project objectives.".to_string()
        )]
    );

    page.handle(PageEvent::Input {
        field: FormField::Name,
        value: "Ana".to_string(),
    });
    assert_eq!(
        page.handle(PageEvent::Submit),
        vec![PageEffect::Notice(
            page.config().contact.missing_fields_notice.clone()
        )]
    );
}

#[test]
fn submit_opens_messaging_link_for_current_owner() {
    let mut page = page();
    fill_form(&mut page);

    let effects = page.handle(PageEvent::Submit);
    let [PageEffect::OpenExternal(url)] = effects.as_slice() else {
        panic!("expected one external open, got {effects:?}");
    };
    assert!(
        url.as_str()
            .starts_with("https://wa.me/919876543210?text=Hello%20"),
        "{url}"
    );
    assert!(url.as_str().contains("My%20email%3A%20Not%20provided."));
}

#[test]
fn submit_without_owner_phone_shows_notice() {
    let mut page = page();
    page.apply_load(loaded(r#"{"profile":{"name":"Ana"},"projects":[{"title":"One"}]}"#));
    fill_form(&mut page);

    assert_eq!(
        page.handle(PageEvent::Submit),
        vec![PageEffect::Notice(
            ContactError::MissingContactTarget.to_string()
        )]
    );
}

#[test]
fn contact_link_reports_contact_errors() {
    let mut page = page();
    assert!(matches!(
        page.contact_link(),
        Err(FolioError::Contact(ContactError::MissingRequiredField(
            FormField::Name
        )))
    ));

    fill_form(&mut page);
    let link = page.contact_link().unwrap();
    assert_eq!(link.url.path(), "/919876543210");
    assert_eq!(link.decoded_text().as_deref(), Some(link.message.as_str()));
}
