//! Server-side render of the application header.

use dioxus::prelude::*;
use ui::components::AppNavbar;

fn render() -> String {
    let mut dom = VirtualDom::new(AppNavbar);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn header_carries_brand_and_tagline() {
    let html = render();
    assert!(html.contains("navbar__brand-mark"));
    assert!(html.contains(ui::sidebar::BRAND_NAME));
    assert!(html.contains("navbar__brand-subtitle"));
    assert!(html.contains("aria-hidden=\"true\""));
}

#[test]
fn locale_picker_lists_every_embedded_language_by_name() {
    let html = render();
    let languages = ui::i18n::available_languages();
    assert!(languages.len() > 1);
    assert!(html.contains("id=\"locale-select\""));
    assert_eq!(html.matches("<option").count(), languages.len());
    for tag in &languages {
        assert!(html.contains(&format!("value=\"{tag}\"")), "missing option {tag}");
        assert!(html.contains(ui::i18n::language_name(tag)));
    }
}
