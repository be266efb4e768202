use std::collections::HashSet;

use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::OnceCell;

use super::{NavEntry, NavError};

/// Platform crates (web/desktop) own their `Route` enum, so `ui` cannot build
/// the route table itself. Each platform registers a plain function that
/// produces the entries; the sidebar calls it on every render so labels pick
/// up the active language.
///
/// ```ignore
/// fn route_table() -> Vec<NavEntry> {
///     vec![NavEntry::new(Route::Dashboard {}.to_string(), i18n::message("nav-dashboard"), Icon::Dashboard)]
/// }
///
/// fn main() {
///     ui::nav::register_routes(route_table).expect("valid route table");
///     dioxus::launch(App);
/// }
/// ```
static ROUTE_TABLE: OnceCell<fn() -> Vec<NavEntry>> = OnceCell::new();

/// Register the process-wide route table. The table is validated once here.
pub fn register_routes(table: fn() -> Vec<NavEntry>) -> Result<(), NavError> {
    validate_entries(&table())?;
    ROUTE_TABLE
        .set(table)
        .map_err(|_| NavError::AlreadyRegistered)?;
    debug!("route table registered");
    Ok(())
}

/// Reject empty paths and duplicate paths.
pub fn validate_entries(entries: &[NavEntry]) -> Result<(), NavError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.path.is_empty() {
            return Err(NavError::EmptyPath {
                name: entry.name.clone(),
            });
        }
        if !seen.insert(entry.path.as_str()) {
            return Err(NavError::DuplicatePath(entry.path.clone()));
        }
    }
    Ok(())
}

/// Where the sidebar reads its entries from.
#[derive(Debug, Clone, Copy, Default)]
pub enum RouteProvider {
    /// The table installed with [`register_routes`].
    #[default]
    Registered,
    /// An explicit table (previews, tests, embedded sidebars).
    Static(fn() -> Vec<NavEntry>),
}

impl RouteProvider {
    /// Every entry the provider knows about, in declaration order.
    pub fn entries(&self) -> Vec<NavEntry> {
        match self {
            RouteProvider::Registered => match ROUTE_TABLE.get() {
                Some(table) => table(),
                None => {
                    warn!("sidebar rendered before a route table was registered");
                    Vec::new()
                }
            },
            RouteProvider::Static(table) => table(),
        }
    }

    /// Entries flagged for the menu, order preserved.
    pub fn menu_entries(&self) -> Vec<NavEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.show_in_menu)
            .collect()
    }
}

impl PartialEq for RouteProvider {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RouteProvider::Registered, RouteProvider::Registered) => true,
            (RouteProvider::Static(a), RouteProvider::Static(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}
