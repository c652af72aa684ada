//! Decoding of search/issues response payloads

use chrono::{DateTime, Utc};
use ghdigest_core::normalize::normalize;
use ghdigest_core::Record;
use serde::Deserialize;

use crate::{Error, Result};

/// Top-level search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

/// Issue or pull request as returned by the search endpoint
#[derive(Debug, Deserialize)]
struct SearchItem {
    title: String,
    html_url: String,
    repository_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SearchItem> for Record {
    fn from(item: SearchItem) -> Self {
        Record {
            title: item.title,
            url: item.html_url,
            repo: item.repository_url,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Parse a search response body into normalized records, newest first
pub fn parse_search_response(body: &str) -> Result<Vec<Record>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("Failed to parse search response: {}", e)))?;

    Ok(normalize(response.items.into_iter().map(Record::from).collect()))
}
