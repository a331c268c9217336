//! Tab queries
//!
//! Mirrors the filter object the host tab API accepts: any combination of
//! the active flag, the current-window flag, and a URL pattern. Unset
//! filters match everything.

use crate::pattern::UrlPattern;
use crate::tab::Tab;

#[derive(Debug, Clone, Default)]
pub struct TabQuery {
    pub active: Option<bool>,
    pub current_window: Option<bool>,
    pub url: Option<UrlPattern>,
}

impl TabQuery {
    /// The query that resolves the user's current tab.
    pub fn active_in_current_window() -> Self {
        Self {
            active: Some(true),
            current_window: Some(true),
            url: None,
        }
    }

    /// All tabs whose URL matches `pattern`, regardless of focus.
    pub fn matching(pattern: UrlPattern) -> Self {
        Self {
            url: Some(pattern),
            ..Self::default()
        }
    }

    pub fn matches(&self, tab: &Tab) -> bool {
        if let Some(active) = self.active {
            if tab.active != active {
                return false;
            }
        }

        if let Some(current_window) = self.current_window {
            if tab.current_window != current_window {
                return false;
            }
        }

        if let Some(pattern) = &self.url {
            if !pattern.matches(&tab.url) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::TabId;

    #[test]
    fn test_default_matches_everything() {
        let query = TabQuery::default();
        assert!(query.matches(&Tab::new(TabId(1), "https://example.com".to_string())));
        assert!(query.matches(&Tab::focused(TabId(2), "about:blank".to_string())));
    }

    #[test]
    fn test_active_in_current_window() {
        let query = TabQuery::active_in_current_window();

        assert!(query.matches(&Tab::focused(TabId(1), "https://example.com".to_string())));
        assert!(!query.matches(&Tab::new(TabId(2), "https://example.com".to_string())));

        // Active tab of an unfocused window does not qualify.
        let mut background_window = Tab::new(TabId(3), "https://example.com".to_string());
        background_window.active = true;
        assert!(!query.matches(&background_window));
    }

    #[test]
    fn test_url_filter() {
        let pattern = UrlPattern::parse("*://example.com/docs*").unwrap();
        let query = TabQuery::matching(pattern);

        assert!(query.matches(&Tab::new(TabId(1), "https://example.com/docs/intro".to_string())));
        assert!(!query.matches(&Tab::new(TabId(2), "https://example.com/blog".to_string())));
    }
}
