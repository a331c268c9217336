//! Tab handle types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque host-assigned tab handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub i32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A browser tab as the host reports it.
///
/// Only the attributes the hide workflow consumes are carried: the handle,
/// the URL, and the two booleans the active-tab query filters on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    /// Whether this is the selected tab of its window.
    pub active: bool,
    /// Whether this tab's window currently has focus.
    pub current_window: bool,
}

impl Tab {
    /// A background tab (not selected, window unfocused).
    pub fn new(id: TabId, url: String) -> Self {
        Self {
            id,
            url,
            active: false,
            current_window: false,
        }
    }

    /// The selected tab of the focused window.
    pub fn focused(id: TabId, url: String) -> Self {
        Self {
            id,
            url,
            active: true,
            current_window: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let tab = Tab::new(TabId(7), "https://example.com".to_string());
        assert!(!tab.active);
        assert!(!tab.current_window);
    }

    #[test]
    fn test_focused() {
        let tab = Tab::focused(TabId(1), "https://example.com".to_string());
        assert!(tab.active);
        assert!(tab.current_window);
        assert_eq!(tab.id, TabId(1));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TabId(42).to_string(), "42");
    }
}
