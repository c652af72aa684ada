//! GitHub search API client

use std::time::Duration;

use async_trait::async_trait;
use ghdigest_core::{IssueSearch, Record, SearchQuery};
use tracing::{debug, info, warn};
use url::Url;

use crate::issues::parse_search_response;
use crate::transport::{ReqwestTransport, Transport};
use crate::{Error, Result};

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// Default wait before retrying a rate-limited request
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(60);

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Success,
    RateLimited,
    Unauthorized,
    Fatal,
}

fn classify(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        403 | 429 => StatusClass::RateLimited,
        401 => StatusClass::Unauthorized,
        _ => StatusClass::Fatal,
    }
}

/// Client for the `search/issues` endpoint
pub struct GitHubClient<T: Transport = ReqwestTransport> {
    transport: T,
    token: String,
    base_url: Url,
    retry_interval: Duration,
}

impl GitHubClient<ReqwestTransport> {
    /// Create a client authenticating with `token`
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_transport(ReqwestTransport::new()?, token)
    }
}

impl<T: Transport> GitHubClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T, token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(DEFAULT_API_URL).map_err(|e| Error::Parse(e.to_string()))?;
        info!(api = %base_url, "Created GitHub client");
        Ok(Self {
            transport,
            token: token.into(),
            base_url,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        })
    }

    /// Point the client at a different API root (e.g. GitHub Enterprise)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url).map_err(|e| Error::Parse(e.to_string()))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    /// Set how long to wait before retrying a rate-limited request
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    /// Full request URL for a query
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = self
            .base_url
            .join("search/issues")
            .map_err(|e| Error::Parse(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", &query.to_string())
            .append_pair("per_page", "100");
        Ok(url)
    }

    /// Run a search, waiting out rate limits
    ///
    /// 403 and 429 responses are retried after the retry interval until a
    /// different status arrives. 401 is an authentication error; any other
    /// non-2xx status aborts with the status and body.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Record>> {
        let url = self.search_url(query)?;
        debug!(query = %query, "Searching issues");

        loop {
            let response = self.transport.get(&url, &self.token).await?;

            match classify(response.status) {
                StatusClass::Success => {
                    let records = parse_search_response(&response.body)?;
                    debug!(query = %query, count = records.len(), "Fetched records");
                    return Ok(records);
                }
                StatusClass::RateLimited => {
                    warn!(
                        status = response.status,
                        retry_in = ?self.retry_interval,
                        "Rate limit exceeded, retrying"
                    );
                    tokio::time::sleep(self.retry_interval).await;
                }
                StatusClass::Unauthorized => {
                    return Err(Error::Auth(format!(
                        "token rejected (status {}): {}",
                        response.status, response.body
                    )));
                }
                StatusClass::Fatal => {
                    return Err(Error::Api {
                        status: response.status,
                        body: response.body,
                    });
                }
            }
        }
    }
}

#[async_trait]
impl<T: Transport> IssueSearch for GitHubClient<T> {
    async fn search(&self, query: &SearchQuery) -> ghdigest_core::Result<Vec<Record>> {
        Ok(self.fetch(query).await?)
    }
}

impl<T: Transport> std::fmt::Debug for GitHubClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("retry_interval", &self.retry_interval)
            .finish_non_exhaustive()
    }
}
