use super::Icon;

/// Display and linking metadata for a single navigable destination.
///
/// Entries are built by the platform crate's route table and handed to the
/// sidebar read-only; `path` doubles as the entry's identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub path: String,
    pub name: String,
    /// Supplementary hint shown as the link's tooltip.
    pub description: Option<String>,
    pub icon: Icon,
    /// Routes that exist but should not be listed in the sidebar set this to `false`.
    pub show_in_menu: bool,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, icon: Icon) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            description: None,
            icon,
            show_in_menu: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.show_in_menu = false;
        self
    }
}
