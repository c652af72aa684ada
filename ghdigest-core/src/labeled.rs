//! Collection of open issues carrying a given label across organizations

use tracing::info;

use crate::normalize::sort_newest_first;
use crate::query::label_name;
use crate::{IssueSearch, Record, Result, SearchQuery};

/// Open issues labeled `label` in every org, newest first
///
/// `label` is the configured (URL-style) label, e.g. `help+wanted`.
pub async fn collect<S: IssueSearch + ?Sized>(
    search: &S,
    orgs: &[String],
    label: &str,
) -> Result<Vec<Record>> {
    let name = label_name(label);
    let mut issues = Vec::new();

    for org in orgs {
        issues.extend(search.search(&SearchQuery::labeled_issues(org, &name)).await?);
    }

    sort_newest_first(&mut issues);
    info!(label = %name, count = issues.len(), "Collected labeled issues");
    Ok(issues)
}
