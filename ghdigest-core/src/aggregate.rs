//! Per-identity aggregation of search results
//!
//! Every identity loop runs sequentially and pauses for
//! [`AggregateOptions::identity_delay`] between identities (never after the
//! last one) to stay under the search API's rate limit. Any failed search
//! aborts the whole aggregation.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use tracing::{debug, info};

use crate::query::ItemState;
use crate::{
    ActionKind, Activity, Bundle, Error, IssueSearch, Record, ReportConfig, Result, SearchQuery,
};

/// Tuning for an aggregation run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// How far back closed pull requests are included
    pub closed_pr_window: Duration,
    /// Pause between consecutive identities
    pub identity_delay: Duration,
    /// Reference time for the closed pull request window
    pub as_of: DateTime<Utc>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            closed_pr_window: Duration::from_secs(365 * 24 * 60 * 60),
            identity_delay: Duration::from_secs(30),
            as_of: Utc::now(),
        }
    }
}

impl AggregateOptions {
    /// Options taken from the report configuration, anchored at the current time
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            closed_pr_window: config.closed_pr_window,
            identity_delay: config.identity_delay,
            as_of: Utc::now(),
        }
    }

    /// First day (inclusive) of the closed pull request window
    pub fn closed_since(&self) -> Result<NaiveDate> {
        let window = TimeDelta::from_std(self.closed_pr_window)
            .map_err(|e| Error::Config(format!("closed_pr_window out of range: {}", e)))?;
        let start = self
            .as_of
            .checked_sub_signed(window)
            .ok_or_else(|| Error::Config("closed_pr_window reaches before the epoch".to_string()))?;
        Ok(start.date_naive())
    }
}

/// Runs categorized searches for configured identities
pub struct Aggregator<'a, S: IssueSearch + ?Sized> {
    search: &'a S,
    options: AggregateOptions,
}

impl<'a, S: IssueSearch + ?Sized> Aggregator<'a, S> {
    /// Create an aggregator over a search backend
    pub fn new(search: &'a S, options: AggregateOptions) -> Self {
        Self { search, options }
    }

    /// Build the dashboard bundle for a single identity
    pub async fn build_bundle(&self, identity: &str) -> Result<Bundle> {
        let since = self.options.closed_since()?;
        debug!(identity = %identity, closed_since = %since, "Building bundle");

        let bundle = Bundle {
            assigned_issues: self.run(SearchQuery::assigned_issues(identity)).await?,
            created_issues: self
                .run(SearchQuery::created_issues(identity, ItemState::Open))
                .await?,
            open_prs: self.run(SearchQuery::open_prs(identity)).await?,
            closed_prs: self.run(SearchQuery::closed_prs(identity, since)).await?,
        };

        info!(
            identity = %identity,
            assigned = bundle.assigned_issues.len(),
            created = bundle.created_issues.len(),
            open_prs = bundle.open_prs.len(),
            closed_prs = bundle.closed_prs.len(),
            "Built bundle"
        );
        Ok(bundle)
    }

    /// Build bundles for every identity, keyed by identity
    pub async fn build_bundles(&self, identities: &[String]) -> Result<BTreeMap<String, Bundle>> {
        let mut bundles = BTreeMap::new();
        for (i, identity) in identities.iter().enumerate() {
            bundles.insert(identity.clone(), self.build_bundle(identity).await?);
            self.pause_between(i, identities.len()).await;
        }
        Ok(bundles)
    }

    /// Fetch every identity's activity for the monthly achievements report
    ///
    /// Each identity's list holds open PRs, closed PRs (within the window),
    /// open created issues and closed created issues, in that order.
    pub async fn fetch_activity(
        &self,
        identities: &[String],
    ) -> Result<BTreeMap<String, Vec<Activity>>> {
        let since = self.options.closed_since()?;
        let mut by_identity = BTreeMap::new();

        for (i, identity) in identities.iter().enumerate() {
            let sources = [
                (SearchQuery::open_prs(identity), ActionKind::OpenedPr),
                (SearchQuery::closed_prs(identity, since), ActionKind::ClosedPr),
                (
                    SearchQuery::created_issues(identity, ItemState::Open),
                    ActionKind::CreatedIssueOpen,
                ),
                (
                    SearchQuery::created_issues(identity, ItemState::Closed),
                    ActionKind::CreatedIssueClosed,
                ),
            ];

            let mut activities = Vec::new();
            for (query, action) in sources {
                let records = self.run(query).await?;
                activities.extend(records.into_iter().map(|r| Activity::from_record(r, action)));
            }

            info!(identity = %identity, count = activities.len(), "Fetched activity");
            by_identity.insert(identity.clone(), activities);
            self.pause_between(i, identities.len()).await;
        }

        Ok(by_identity)
    }

    /// Pull requests each identity authored across `orgs`, concatenated in org order
    pub async fn collect_contributions(
        &self,
        identities: &[String],
        orgs: &[String],
    ) -> Result<BTreeMap<String, Vec<Record>>> {
        let mut by_identity = BTreeMap::new();

        for (i, identity) in identities.iter().enumerate() {
            let mut prs = Vec::new();
            for org in orgs {
                prs.extend(self.run(SearchQuery::org_prs(org, identity)).await?);
            }
            info!(identity = %identity, count = prs.len(), "Collected contributions");
            by_identity.insert(identity.clone(), prs);
            self.pause_between(i, identities.len()).await;
        }

        Ok(by_identity)
    }

    async fn run(&self, query: SearchQuery) -> Result<Vec<Record>> {
        let records = self.search.search(&query).await?;
        debug!(query = %query, count = records.len(), "Search complete");
        Ok(records)
    }

    async fn pause_between(&self, index: usize, total: usize) {
        let delay = self.options.identity_delay;
        if index + 1 < total && !delay.is_zero() {
            info!(delay = ?delay, "Sleeping between identities to avoid rate limiting");
            tokio::time::sleep(delay).await;
        }
    }
}
