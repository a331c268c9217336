//! hushmove Core
//!
//! Wires the keyboard command surface to the hide-and-tidy workflow:
//! parse the command name, resolve the focused tab, hide the listing
//! server-side, close the tab, refresh every open search-results tab.

mod bus;
mod command;
mod error;
mod hider;

pub use bus::{CommandBus, CommandHandler};
pub use command::Command;
pub use error::CoreError;
pub use hider::PropertyHider;

// Re-export the member crates' surface.
pub use hushmove_listing::{property_id, search_page_patterns, PropertyId, STATUS_ENDPOINT};
pub use hushmove_status::{StatusAction, StatusApi, StatusClient, StatusError, StatusUpdate};
pub use hushmove_tabs::{
    active_tab, query_any, reload_all, MemoryTabs, Tab, TabApi, TabError, TabId, TabQuery,
    UrlPattern,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
