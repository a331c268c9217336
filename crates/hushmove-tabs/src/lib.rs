//! hushmove Tab Surface
//!
//! Thin model of the host browser's tab API: typed handles, URL match
//! patterns, a query shape, and the `TabApi` seam the hide workflow drives.
//! A host bridge implements `TabApi` against the real browser; `MemoryTabs`
//! is the in-process reference implementation used by tests.

mod api;
mod error;
mod memory;
mod pattern;
mod query;
mod tab;

pub use api::{active_tab, query_any, reload_all, TabApi};
pub use error::TabError;
pub use memory::MemoryTabs;
pub use pattern::UrlPattern;
pub use query::TabQuery;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
