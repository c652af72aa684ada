//! Contribution table: each user's pull requests in the contribution orgs

use std::collections::BTreeMap;

use super::html::{escape, page};
use crate::Record;

const STYLE: &str = "body { font-size: 0.95rem; } \
table td, table th { vertical-align: top; } \
.pr-link { font-size: 0.8rem; margin-right: 6px; display: inline-block; text-decoration: none; } \
.pr-link:hover { text-decoration: underline; }";

pub(super) fn render(prs_by_user: &BTreeMap<String, Vec<Record>>) -> String {
    let rows: String = prs_by_user
        .iter()
        .map(|(user, prs)| {
            let links = if prs.is_empty() {
                "<em>No PRs</em>".to_string()
            } else {
                prs.iter()
                    .map(|pr| {
                        format!(
                            "<a href=\"{}\" target=\"_blank\" class=\"pr-link\">[{}]</a>",
                            escape(&pr.url),
                            escape(&pr.repo)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n                    ")
            };
            format!(
                r#"            <tr>
                <td><strong>{user}</strong></td>
                <td>
                    {links}
                </td>
            </tr>
"#,
                user = escape(user),
            )
        })
        .collect();

    let body = format!(
        r#"    <h1 class="mb-4">Kubernetes PR Contributions</h1>
    <div class="mb-3">
        <a href="user_dashboard.html" class="btn btn-secondary">&larr; Back to Dashboard</a>
    </div>
    <table class="table table-bordered table-sm align-middle">
        <thead class="table-light">
            <tr>
                <th style="width: 20%;">User</th>
                <th>Pull Requests</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>"#
    );
    page("Kubernetes PR Contributions", STYLE, false, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    #[test]
    fn test_links_and_empty_rows() {
        let mut prs = BTreeMap::new();
        prs.insert(
            "alice".to_string(),
            vec![
                record("a", "kubectl", "2025-01-01T00:00:00Z"),
                record("b", "kind", "2025-02-01T00:00:00Z"),
            ],
        );
        prs.insert("bob".to_string(), Vec::new());

        let html = render(&prs);

        assert!(html.contains("class=\"pr-link\">[kubectl]</a>"));
        assert!(html.contains("class=\"pr-link\">[kind]</a>"));
        assert!(html.contains("<em>No PRs</em>"));
        assert!(html.contains("href=\"user_dashboard.html\""));
    }
}
