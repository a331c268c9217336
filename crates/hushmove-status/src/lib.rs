//! hushmove Status Client
//!
//! Talks to the per-account property status endpoint. Exactly one
//! operation is consumed: mark a listing hidden. Success is any 2xx
//! response; any other status is a rejection and the caller stops.

mod client;
mod error;
mod request;

pub use client::{StatusApi, StatusClient};
pub use error::StatusError;
pub use request::{StatusAction, StatusUpdate};

pub use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, StatusError>;
