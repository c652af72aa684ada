//! ghdigest core - aggregation and rendering of GitHub activity reports
//!
//! This crate turns search results for a set of users and organizations into
//! dashboards: per-user issue/PR bundles, labeled-issue listings, monthly
//! achievements and contribution tables. The network lives behind the
//! [`IssueSearch`] trait.

pub mod activity;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod labeled;
pub mod model;
pub mod normalize;
pub mod query;
pub mod render;
pub mod report;
pub mod search;
pub mod secrets;

pub use activity::{group, MonthlyGrouping};
pub use aggregate::{AggregateOptions, Aggregator};
pub use config::ReportConfig;
pub use error::{Error, Result};
pub use model::{ActionKind, Activity, Bundle, Category, Record};
pub use query::SearchQuery;
pub use render::render;
pub use report::{ReportData, ReportKind};
pub use search::IssueSearch;
