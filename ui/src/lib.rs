//! Shared UI crate for AiguaApp. Components, views, navigation and i18n live
//! here; the platform crates (web/desktop) only own their `Route` enum, the
//! route table and the layout shell.

pub mod i18n;
pub mod nav;
pub mod sidebar;
pub mod views;

pub mod components {
    // Top bar with brand and locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Responsive navigation sidebar (components/sidebar.rs)
    pub mod sidebar;
    pub use sidebar::Sidebar;
}

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;
