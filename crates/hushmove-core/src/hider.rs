//! The hide-and-tidy workflow

use async_trait::async_trait;
use hushmove_listing::{property_id, search_page_patterns};
use hushmove_status::StatusApi;
use hushmove_tabs::{active_tab, query_any, reload_all, TabApi, UrlPattern};

use crate::bus::CommandHandler;
use crate::command::Command;
use crate::Result;

/// Runs the whole workflow for one command invocation.
///
/// Control flow is linear: one silent early-exit when the focused tab is
/// not a property page, one fail-stop at the hide request (the tab stays
/// open if the endpoint rejects it), no retries, no rollback of completed
/// steps. Invocations are independent; nothing is kept between them.
pub struct PropertyHider<T, S> {
    tabs: T,
    status: S,
}

impl<T: TabApi, S: StatusApi> PropertyHider<T, S> {
    pub fn new(tabs: T, status: S) -> Self {
        Self { tabs, status }
    }

    /// Hide the listing in the focused tab, close that tab, and reload
    /// every open search-results tab.
    pub async fn hide_current_property(&self) -> Result<()> {
        let tab = active_tab(&self.tabs).await?;

        let Some(id) = property_id(&tab.url) else {
            tracing::debug!(url = %tab.url, "focused tab is not a property page");
            return Ok(());
        };

        self.status.hide(&id).await?;

        self.tabs.close(tab.id).await?;

        let patterns = search_patterns()?;
        let search_tabs = query_any(&self.tabs, &patterns).await?;
        reload_all(&self.tabs, &search_tabs).await?;

        tracing::info!(
            property_id = %id,
            tab_id = %tab.id,
            refreshed = search_tabs.len(),
            "hid property and refreshed search tabs"
        );

        Ok(())
    }
}

#[async_trait]
impl<T: TabApi, S: StatusApi> CommandHandler for PropertyHider<T, S> {
    async fn on_command(&self, name: &str) -> Result<()> {
        match Command::parse(name) {
            Some(Command::HideProperty) => self.hide_current_property().await,
            None => Ok(()),
        }
    }
}

fn search_patterns() -> Result<Vec<UrlPattern>> {
    search_page_patterns()
        .iter()
        .map(|raw| UrlPattern::parse(raw).map_err(Into::into))
        .collect()
}
