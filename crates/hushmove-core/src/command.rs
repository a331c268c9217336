//! Keyboard command names

/// Commands delivered by the host's keyboard-shortcut surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hide the listing in the focused tab and tidy up after it.
    HideProperty,
}

impl Command {
    /// Map a host command name onto a known command.
    ///
    /// Unknown names are simply not ours; the handler ignores them.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hide-property" => Some(Self::HideProperty),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HideProperty => "hide-property",
        }
    }
}
