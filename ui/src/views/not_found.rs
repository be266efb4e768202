use dioxus::prelude::*;

use crate::t;

/// Catch-all page; `segments` is the unmatched path, echoed back to the user.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let attempted = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-intro")} }
            code { class: "page-not-found__path", "{attempted}" }
        }
    }
}
