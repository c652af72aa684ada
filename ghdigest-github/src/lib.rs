//! ghdigest GitHub - search API access for ghdigest
//!
//! This crate implements [`ghdigest_core::IssueSearch`] against GitHub's
//! `search/issues` endpoint, including rate-limit waits and status handling.

mod client;
mod error;
mod issues;
pub mod transport;

pub use client::{GitHubClient, DEFAULT_API_URL, DEFAULT_RETRY_INTERVAL};
pub use error::{Error, Result};
pub use issues::parse_search_response;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
