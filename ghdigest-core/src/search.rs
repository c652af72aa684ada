//! The seam between aggregation and the upstream search API

use async_trait::async_trait;

use crate::{Record, Result, SearchQuery};

/// Something that can run an issue search and return normalized records
///
/// Implementations return records with short repository names, sorted newest
/// first (see [`crate::normalize`]).
#[async_trait]
pub trait IssueSearch: Send + Sync {
    /// Run a single search
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Record>>;
}
