use dioxus::prelude::*;

use ui::components::{AppNavbar, Sidebar};
use ui::nav::{self, Icon, NavEntry, NavHost};
use ui::views::{Alerts, Consumption, Dashboard, NotFound, Profile, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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
));

/// Sidebar route table. Paths come from the `Route` enum so the two can't drift.
/// Called on every sidebar render, so labels follow the active language.
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
        // Reachable by URL only.
        NavEntry::new(Route::Profile {}.to_string(), message("nav-profile"), Icon::User)
            .with_description(message("nav-profile-hint"))
            .hidden(),
    ]
}

fn main() {
    dioxus::logger::initialize_default();
    if let Err(err) = nav::register_routes(route_table) {
        dioxus::logger::tracing::error!(%err, "invalid sidebar route table");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: navbar on top, sidebar beside the routed page.
#[component]
fn WebShell() -> Element {
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
