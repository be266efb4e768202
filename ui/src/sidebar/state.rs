//! Visibility state of the off-canvas panel.

use crate::nav::Icon;

/// Whether the collapsible panel is shown on narrow viewports. Wide viewports
/// ignore it: the panel is always visible there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == OpenState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            OpenState::Closed => OpenState::Open,
            OpenState::Open => OpenState::Closed,
        }
    }

    /// Glyph for the floating toggle: a menu when closed, a cross when open.
    pub fn toggle_icon(self) -> Icon {
        match self {
            OpenState::Closed => Icon::Menu,
            OpenState::Open => Icon::Close,
        }
    }
}
