//! Property status client

use std::sync::Arc;

use async_trait::async_trait;
use hushmove_listing::{PropertyId, STATUS_ENDPOINT};
use reqwest::cookie::Jar;
use url::Url;

use crate::request::StatusUpdate;
use crate::{Result, StatusError};

/// The remote operation the hide workflow performs.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Mark a property hidden for the signed-in account.
    async fn hide(&self, id: &PropertyId) -> Result<()>;
}

/// HTTP client for the property status endpoint.
///
/// Authentication is whatever session the cookie jar carries; the endpoint
/// performs no token exchange. No timeout is configured, so the transport
/// stack's defaults apply.
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl StatusClient {
    /// Client against the production endpoint with an empty session jar.
    pub fn new() -> Result<Self> {
        Self::with_session(Arc::new(Jar::default()))
    }

    /// Client with the signed-in user's session jar injected.
    pub fn with_session(jar: Arc<Jar>) -> Result<Self> {
        let endpoint = Url::parse(STATUS_ENDPOINT)?;
        Self::with_endpoint(endpoint, jar)
    }

    /// Point the client somewhere else (a staging host, a local stub).
    pub fn with_endpoint(endpoint: Url, jar: Arc<Jar>) -> Result<Self> {
        let http = reqwest::Client::builder().cookie_provider(jar).build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StatusApi for StatusClient {
    async fn hide(&self, id: &PropertyId) -> Result<()> {
        let body = [StatusUpdate::hide(id.clone())];

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::Rejected { status });
        }

        tracing::info!(property_id = %id, "marked property hidden");
        Ok(())
    }
}
