//! Host tab operations
//!
//! `TabApi` is the seam between the workflow and the host browser. The
//! free functions compose it into the three shapes the workflow needs:
//! resolve the active tab, query several patterns at once, reload a batch.

use async_trait::async_trait;
use futures_util::future::try_join_all;

use crate::pattern::UrlPattern;
use crate::query::TabQuery;
use crate::tab::{Tab, TabId};
use crate::{Result, TabError};

/// The slice of the host browser's tab surface hushmove consumes.
#[async_trait]
pub trait TabApi: Send + Sync {
    /// Tabs matching the query, in host order.
    async fn query(&self, query: TabQuery) -> Result<Vec<Tab>>;

    /// Close a tab by handle.
    async fn close(&self, id: TabId) -> Result<()>;

    /// Reload a tab by handle.
    async fn reload(&self, id: TabId) -> Result<()>;
}

/// Resolve the active tab of the focused window.
pub async fn active_tab<A: TabApi + ?Sized>(api: &A) -> Result<Tab> {
    let mut tabs = api.query(TabQuery::active_in_current_window()).await?;
    if tabs.is_empty() {
        return Err(TabError::NoActiveTab);
    }
    Ok(tabs.remove(0))
}

/// Query every pattern at once and flatten the results.
///
/// All queries are dispatched together and awaited together; the first
/// failure fails the whole batch.
pub async fn query_any<A: TabApi + ?Sized>(api: &A, patterns: &[UrlPattern]) -> Result<Vec<Tab>> {
    let results = try_join_all(
        patterns
            .iter()
            .map(|pattern| api.query(TabQuery::matching(pattern.clone()))),
    )
    .await?;

    Ok(results.into_iter().flatten().collect())
}

/// Reload every tab at once, with no ordering guarantee among the reloads.
///
/// The first failure fails the whole batch.
pub async fn reload_all<A: TabApi + ?Sized>(api: &A, tabs: &[Tab]) -> Result<()> {
    try_join_all(tabs.iter().map(|tab| api.reload(tab.id))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTabs;

    #[tokio::test]
    async fn test_active_tab() {
        let api = MemoryTabs::with_tabs(vec![
            Tab::new(TabId(1), "https://example.com/a".to_string()),
            Tab::focused(TabId(2), "https://example.com/b".to_string()),
        ]);

        let tab = active_tab(&api).await.unwrap();
        assert_eq!(tab.id, TabId(2));
    }

    #[tokio::test]
    async fn test_active_tab_none() {
        let api = MemoryTabs::with_tabs(vec![Tab::new(
            TabId(1),
            "https://example.com".to_string(),
        )]);

        assert!(matches!(
            active_tab(&api).await,
            Err(TabError::NoActiveTab)
        ));
    }

    #[tokio::test]
    async fn test_query_any_flattens() {
        let api = MemoryTabs::with_tabs(vec![
            Tab::new(TabId(1), "https://example.com/docs/a".to_string()),
            Tab::new(TabId(2), "https://example.com/blog/b".to_string()),
            Tab::new(TabId(3), "https://other.example/".to_string()),
        ]);

        let patterns = [
            UrlPattern::parse("*://example.com/docs*").unwrap(),
            UrlPattern::parse("*://example.com/blog*").unwrap(),
        ];

        let tabs = query_any(&api, &patterns).await.unwrap();
        let ids: Vec<TabId> = tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TabId(1), TabId(2)]);
    }

    #[tokio::test]
    async fn test_reload_all() {
        let api = MemoryTabs::with_tabs(vec![
            Tab::new(TabId(1), "https://example.com/a".to_string()),
            Tab::new(TabId(2), "https://example.com/b".to_string()),
        ]);

        let tabs = api.query(TabQuery::default()).await.unwrap();
        reload_all(&api, &tabs).await.unwrap();

        let mut reloaded = api.reloaded();
        reloaded.sort_by_key(|id| id.0);
        assert_eq!(reloaded, vec![TabId(1), TabId(2)]);
    }

    #[tokio::test]
    async fn test_reload_all_fails_on_missing_tab() {
        let api = MemoryTabs::new();
        let ghost = Tab::new(TabId(9), "https://example.com".to_string());

        assert!(reload_all(&api, &[ghost]).await.is_err());
    }
}
