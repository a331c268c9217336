//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("tab error: {0}")]
    Tabs(#[from] hushmove_tabs::TabError),

    #[error("status error: {0}")]
    Status(#[from] hushmove_status::StatusError),
}
