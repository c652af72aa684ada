//! Record normalization applied to every search result batch

use crate::Record;

/// Reduce an API repository URL to its short name
///
/// `https://api.github.com/repos/owner/widgets` becomes `widgets`. Values
/// without a `/` are returned unchanged.
pub fn short_repo_name(repository_url: &str) -> &str {
    match repository_url.rfind('/') {
        Some(idx) => &repository_url[idx + 1..],
        None => repository_url,
    }
}

/// Sort records newest first by creation time
///
/// Compares parsed instants. For the API's UTC `...Z` timestamps this is the
/// same order as comparing the RFC3339 strings lexicographically. The sort is
/// stable, so records created at the same instant keep their
/// relative input order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Shorten repository names and order a freshly fetched batch
pub fn normalize(mut records: Vec<Record>) -> Vec<Record> {
    for record in &mut records {
        let short = short_repo_name(&record.repo);
        if short.len() != record.repo.len() {
            record.repo = short.to_string();
        }
    }
    sort_newest_first(&mut records);
    records
}
