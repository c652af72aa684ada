//! HTTP exchange used by the client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use url::Url;

use crate::Result;

/// Upper bound on establishing a connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs an authenticated GET
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url, token: &str) -> Result<HttpResponse>;
}

/// [`Transport`] backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a 30 second connect timeout
    ///
    /// Only connection setup is bounded; a slow response body is waited for.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, token: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("ghdigest/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
