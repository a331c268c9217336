//! In-memory tab surface
//!
//! Reference implementation of `TabApi`: a plain list of tabs plus a log
//! of the close and reload calls made against it. Sibling crates use it
//! the way they would use an in-memory database - seed tabs, run the
//! workflow, inspect what happened.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::TabApi;
use crate::query::TabQuery;
use crate::tab::{Tab, TabId};
use crate::{Result, TabError};

pub struct MemoryTabs {
    tabs: Arc<RwLock<Vec<Tab>>>,
    closed: Arc<RwLock<Vec<TabId>>>,
    reloaded: Arc<RwLock<Vec<TabId>>>,
}

impl MemoryTabs {
    pub fn new() -> Self {
        Self::with_tabs(Vec::new())
    }

    pub fn with_tabs(tabs: Vec<Tab>) -> Self {
        Self {
            tabs: Arc::new(RwLock::new(tabs)),
            closed: Arc::new(RwLock::new(Vec::new())),
            reloaded: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn insert(&self, tab: Tab) {
        self.tabs.write().push(tab);
    }

    /// Tabs still open, in insertion order.
    pub fn open_tabs(&self) -> Vec<Tab> {
        self.tabs.read().clone()
    }

    /// Handles closed so far, in call order.
    pub fn closed(&self) -> Vec<TabId> {
        self.closed.read().clone()
    }

    /// Handles reloaded so far, in call order.
    pub fn reloaded(&self) -> Vec<TabId> {
        self.reloaded.read().clone()
    }
}

#[async_trait]
impl TabApi for MemoryTabs {
    async fn query(&self, query: TabQuery) -> Result<Vec<Tab>> {
        Ok(self
            .tabs
            .read()
            .iter()
            .filter(|tab| query.matches(tab))
            .cloned()
            .collect())
    }

    async fn close(&self, id: TabId) -> Result<()> {
        let mut tabs = self.tabs.write();
        let before = tabs.len();
        tabs.retain(|tab| tab.id != id);

        if tabs.len() == before {
            return Err(TabError::Host(format!("no tab with id {id}")));
        }

        self.closed.write().push(id);
        tracing::debug!(tab_id = %id, "closed tab");
        Ok(())
    }

    async fn reload(&self, id: TabId) -> Result<()> {
        if !self.tabs.read().iter().any(|tab| tab.id == id) {
            return Err(TabError::Host(format!("no tab with id {id}")));
        }

        self.reloaded.write().push(id);
        tracing::debug!(tab_id = %id, "reloaded tab");
        Ok(())
    }
}

impl Default for MemoryTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryTabs {
    fn clone(&self) -> Self {
        Self {
            tabs: Arc::clone(&self.tabs),
            closed: Arc::clone(&self.closed),
            reloaded: Arc::clone(&self.reloaded),
        }
    }
}
