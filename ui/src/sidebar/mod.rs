//! Platform-agnostic sidebar logic. The `Sidebar` component in
//! `components::sidebar` is a thin rendering layer over these types.

mod model;
mod state;

pub use model::{activate_link, dismiss_overlay, NavLinkModel, SidebarModel};
pub use state::OpenState;

/// Viewport width (px) from which the panel is permanently visible and the
/// toggle/overlay are hidden. Must match the `@media` block in `sidebar.css`.
pub const WIDE_BREAKPOINT_PX: u32 = 1024;

/// Fixed brand line shown in the sidebar footer.
pub const BRAND_NAME: &str = "AiguaApp";
