//! Render model for the sidebar.
//!
//! `SidebarModel::build` turns the provider's entries, the router host and the
//! current `OpenState` into exactly what the component draws. It is pure: it
//! only *queries* the host and never navigates.

use dioxus::logger::tracing::{debug, warn};

use super::OpenState;
use crate::nav::{Icon, NavEntry, RouterHost};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarModel {
    pub open: OpenState,
    pub overlay_visible: bool,
    pub links: Vec<NavLinkModel>,
}

/// One rendered link, in provider order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkModel {
    pub path: String,
    pub name: String,
    pub hint: Option<String>,
    pub icon: Icon,
    pub active: bool,
}

impl SidebarModel {
    pub fn build(entries: &[NavEntry], host: &dyn RouterHost, open: OpenState) -> Self {
        let links = entries
            .iter()
            .map(|entry| NavLinkModel {
                path: entry.path.clone(),
                name: entry.name.clone(),
                hint: entry.description.clone(),
                icon: entry.icon,
                active: host.is_current_path(&entry.path),
            })
            .collect();

        Self {
            open,
            overlay_visible: open.is_open(),
            links,
        }
    }

    pub fn active_path(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.path.as_str())
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open.is_open() {
            "sidebar sidebar--open"
        } else {
            "sidebar"
        }
    }
}

impl NavLinkModel {
    pub fn class(&self) -> &'static str {
        if self.active {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    }
}

/// Link activation: navigate to `path`, then collapse the panel. The panel
/// collapses even if the host rejects the path.
pub fn activate_link(host: &dyn RouterHost, path: &str) -> OpenState {
    match host.navigate(path) {
        Ok(()) => debug!(path, "sidebar navigation"),
        Err(err) => warn!(path, %err, "sidebar navigation failed"),
    }
    OpenState::Closed
}

/// Overlay click. The overlay only exists while the panel is open, and
/// clicking it always collapses the panel.
pub fn dismiss_overlay() -> OpenState {
    OpenState::Closed
}
