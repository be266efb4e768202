#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{AppNavbar, Sidebar};
use ui::nav::{self, Icon, NavEntry, NavHost};
use ui::views::{Alerts, Consumption, Dashboard, NotFound, Profile, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/consumption")]
    Consumption {},
    #[route("/alerts")]
    Alerts {},
    #[route("/settings")]
    Settings {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn route_table() -> Vec<NavEntry> {
    use ui::i18n::message;

    vec![
        NavEntry::new(Route::Dashboard {}.to_string(), message("nav-dashboard"), Icon::Dashboard)
            .with_description(message("nav-dashboard-hint")),
        NavEntry::new(Route::Consumption {}.to_string(), message("nav-consumption"), Icon::Droplets)
            .with_description(message("nav-consumption-hint")),
        NavEntry::new(Route::Alerts {}.to_string(), message("nav-alerts"), Icon::Bell)
            .with_description(message("nav-alerts-hint")),
        NavEntry::new(Route::Settings {}.to_string(), message("nav-settings"), Icon::Settings)
            .with_description(message("nav-settings-hint")),
        NavEntry::new(Route::Profile {}.to_string(), message("nav-profile"), Icon::User)
            .with_description(message("nav-profile-hint"))
            .hidden(),
    ]
}

fn install_routes() {
    if let Err(err) = nav::register_routes(route_table) {
        dioxus::logger::tracing::error!(%err, "invalid sidebar route table");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    install_routes();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("AiguaApp – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    install_routes();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: navbar on top, sidebar beside the routed page.
#[component]
fn DesktopShell() -> Element {
    let current = use_route::<Route>();

    rsx! {
        AppNavbar { }
        div { class: "app-shell",
            Sidebar { host: NavHost::routed(current) }
            main { class: "app-shell__content",
                Outlet::<Route> {}
            }
        }
    }
}
