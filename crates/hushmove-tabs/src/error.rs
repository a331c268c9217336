//! Tab surface error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("no active tab in the current window")]
    NoActiveTab,

    #[error("invalid url pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("host tab operation failed: {0}")]
    Host(String),
}
