use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Consumption() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-consumption",
            h1 { {t!("consumption-title")} }
            p { {t!("consumption-intro")} }
        }
    }
}
