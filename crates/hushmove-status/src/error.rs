//! Status client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    /// The endpoint answered with a non-success status. The response body
    /// is not inspected.
    #[error("hide request rejected with status {status}")]
    Rejected { status: reqwest::StatusCode },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}
