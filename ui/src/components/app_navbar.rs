use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::i18n;
use crate::sidebar::BRAND_NAME;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Header above the sidebar layout: the AiguaApp mark with its tagline, and
/// the locale picker.
///
/// Its height is the `--navbar-height` token the pinned sidebar offsets by.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Reading the shared code re-renders the header when the language changes.
    let lang = try_use_context::<Signal<String>>().map(|code| code());
    debug!(?lang, "navbar render");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-drop", "aria-hidden": "true" }
                    div { class: "navbar__brand-text",
                        span { class: "navbar__brand-mark", "{BRAND_NAME}" }
                        span { class: "navbar__brand-subtitle", {t!("tagline")} }
                    }
                }
                LocaleSelect {}
            }
        }
    }
}

/// Picker over the embedded locales, labelled with each language's own name.
/// Renders nothing when only the fallback locale is embedded.
#[component]
fn LocaleSelect() -> Element {
    let languages = use_hook(i18n::available_languages);
    let mut selected = use_signal(i18n::current_language);
    let shared = try_use_context::<Signal<String>>();

    if languages.len() < 2 {
        return rsx! {};
    }

    let choose = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                debug!(%tag, "language switched");
                selected.set(tag.clone());
                if let Some(mut code) = shared {
                    code.set(tag);
                }
            }
            Err(err) => warn!(%tag, %err, "language switch failed"),
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select { id: "locale-select", value: "{selected}", oninput: choose,
                for tag in languages.iter() {
                    option {
                        key: "{tag}",
                        value: "{tag}",
                        selected: *tag == selected(),
                        "{i18n::language_name(tag)}"
                    }
                }
            }
        }
    }
}
