use crate::i18n;
use crate::nav::{NavHost, RouteProvider};
use crate::sidebar::{activate_link, dismiss_overlay, NavLinkModel, OpenState, SidebarModel, BRAND_NAME};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
const SIDEBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sidebar.css"
));

/// Responsive navigation sidebar.
///
/// Wide viewports show the panel permanently. Narrow viewports keep it
/// off-canvas behind a floating toggle; while open, a dimming overlay covers
/// the page and dismisses the panel when clicked. Following any link also
/// closes it.
///
/// `host` supplies the current-location check and navigation, so the platform
/// crates pass `NavHost::routed(use_route::<Route>())`. `routes` defaults to the
/// table installed with `nav::register_routes`.
#[component]
pub fn Sidebar(host: NavHost, #[props(default)] routes: RouteProvider) -> Element {
    i18n::init();

    let mut open = use_signal(OpenState::default);
    // Re-render on language change (signal provided by the platform App).
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let entries = routes.menu_entries();
    let model = SidebarModel::build(&entries, &*host, open());

    #[cfg(debug_assertions)]
    debug!(
        open = ?model.open,
        links = model.links.len(),
        active = model.active_path().unwrap_or("-"),
        "sidebar render"
    );

    let toggle_label = if model.open.is_open() {
        t!("sidebar-close-menu")
    } else {
        t!("sidebar-open-menu")
    };
    let toggle_icon = model.open.toggle_icon().render("sidebar__toggle-icon");
    let expanded = model.open.is_open();
    let panel_class = model.panel_class();
    let overlay_visible = model.overlay_visible;

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDEBAR_CSS_INLINE}" }
        }

        button {
            r#type: "button",
            class: "sidebar__toggle",
            aria_label: "{toggle_label}",
            aria_expanded: "{expanded}",
            aria_controls: "app-sidebar",
            onclick: move |_| {
                let next = open().toggled();
                debug!(state = ?next, "sidebar toggled");
                open.set(next);
            },
            {toggle_icon}
        }

        if overlay_visible {
            div {
                class: "sidebar__overlay",
                aria_label: t!("sidebar-dismiss"),
                onclick: move |_| open.set(dismiss_overlay()),
            }
        }

        aside { id: "app-sidebar", class: "{panel_class}",
            nav { class: "sidebar__nav", aria_label: t!("sidebar-nav-label"),
                ul { class: "sidebar__links",
                    for link in model.links.into_iter() {
                        {render_link(link, host.clone(), open)}
                    }
                }
            }

            div { class: "sidebar__footer",
                p { class: "sidebar__footer-brand", "{BRAND_NAME}" }
                p { class: "sidebar__footer-tagline", {t!("sidebar-footer-tagline")} }
            }
        }
    }
}

fn render_link(link: NavLinkModel, host: NavHost, mut open: Signal<OpenState>) -> Element {
    let class = link.class();
    let NavLinkModel {
        path,
        name,
        hint,
        icon,
        active,
    } = link;

    let target = path.clone();
    let aria_current = active.then_some("page");

    rsx! {
        li { class: "sidebar__item",
            a {
                class: "{class}",
                href: "{path}",
                title: hint,
                aria_current: aria_current,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    open.set(activate_link(&*host, &target));
                },
                {icon.render("sidebar__icon")}
                span { class: "sidebar__label", "{name}" }
            }
        }
    }
}
