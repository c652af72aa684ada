//! Labeled-issue listing

use super::html::{escape, format_timestamp, page};
use crate::Record;

pub(super) fn render(label: &str, issues: &[Record]) -> String {
    let title = format!("Issues: {}", label);

    let content = if issues.is_empty() {
        "    <p>No issues found</p>".to_string()
    } else {
        let rows: String = issues
            .iter()
            .map(|r| {
                format!(
                    r#"            <tr>
                <td>{title}</td>
                <td>{repo}</td>
                <td><a href="{url}" target="_blank">{url}</a></td>
                <td>{created}</td>
            </tr>
"#,
                    title = escape(&r.title),
                    repo = escape(&r.repo),
                    url = escape(&r.url),
                    created = format_timestamp(&r.created_at),
                )
            })
            .collect();

        format!(
            r#"    <table class="table table-striped">
        <thead>
            <tr>
                <th>Title</th>
                <th>Repository</th>
                <th>URL</th>
                <th>Created At</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>"#
        )
    };

    let body = format!(
        "    <h1 class=\"mb-4\">{}</h1>\n{}",
        escape(&title),
        content
    );
    page(&title, "", false, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    #[test]
    fn test_lists_issues_in_given_order() {
        let issues = vec![
            record("Newer", "a", "2025-04-01T00:00:00Z"),
            record("Older", "b", "2025-01-01T00:00:00Z"),
        ];

        let html = render("help wanted", &issues);

        assert!(html.contains("<h1 class=\"mb-4\">Issues: help wanted</h1>"));
        assert!(html.find("Newer").unwrap() < html.find("Older").unwrap());
        assert!(html.contains("<td>2025-04-01T00:00:00Z</td>"));
        assert!(!html.contains("No issues found"));
    }

    #[test]
    fn test_empty_state() {
        let html = render("good first issue", &[]);
        assert!(html.contains("No issues found"));
        assert!(!html.contains("<table"));
    }
}
