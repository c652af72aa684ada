//! Per-user dashboard

use std::collections::BTreeMap;

use super::html::{escape, escape_id, format_timestamp, page};
use crate::{Bundle, Category, Record};

const STYLE: &str = "h3 { font-size: 1.25rem; font-weight: bold; padding: 0.5rem; border-radius: 0.25rem; } \
.table td, .table th { width: auto; text-align: left; }";

fn section_title(category: Category) -> &'static str {
    match category {
        Category::AssignedIssues => "Assigned Issues",
        Category::CreatedIssues => "Created Issues",
        Category::OpenPrs => "Open PRs",
        Category::ClosedPrs => "Closed PRs (past 1 year)",
    }
}

fn empty_message(category: Category) -> &'static str {
    match category {
        Category::AssignedIssues => "No assigned issues",
        Category::CreatedIssues => "No created issues",
        Category::OpenPrs => "No open PRs",
        Category::ClosedPrs => "No closed PRs",
    }
}

fn section_color(category: Category) -> &'static str {
    match category {
        Category::AssignedIssues => "#d1e7dd",
        Category::CreatedIssues => "#ffeeba",
        Category::OpenPrs | Category::ClosedPrs => "#f8d7da",
    }
}

pub(super) fn render(bundles: &BTreeMap<String, Bundle>) -> String {
    let items: String = bundles
        .iter()
        .map(|(user, bundle)| render_user(user, bundle))
        .collect();

    let body = format!(
        r#"    <h1 class="mb-4">GitHub Dashboard</h1>
    <div class="accordion" id="usersAccordion">
{items}    </div>"#
    );
    page("GitHub Dashboard", STYLE, true, &body)
}

fn render_user(user: &str, bundle: &Bundle) -> String {
    let id = escape_id(user);
    let sections: String = Category::ALL
        .iter()
        .map(|&category| render_section(category, bundle.get(category)))
        .collect();

    format!(
        r##"        <div class="accordion-item">
            <h2 class="accordion-header" id="heading-{id}">
                <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-{id}" aria-expanded="false" aria-controls="collapse-{id}">
                    <span style="font-size: 1.5rem; font-weight: bold;">{user}</span>
                </button>
            </h2>
            <div id="collapse-{id}" class="accordion-collapse collapse" aria-labelledby="heading-{id}" data-bs-parent="#usersAccordion">
                <div class="accordion-body">
{sections}                </div>
            </div>
        </div>
"##,
        user = escape(user),
    )
}

fn render_section(category: Category, records: &[Record]) -> String {
    let heading = format!(
        "                    <h3 style=\"background-color: {};\">{}</h3>\n",
        section_color(category),
        section_title(category)
    );

    if records.is_empty() {
        return format!(
            "{}                    <p>{}</p>\n",
            heading,
            empty_message(category)
        );
    }

    let rows: String = records
        .iter()
        .map(|r| {
            format!(
                "                            <tr><td>{title}</td><td>{repo}</td><td><a href=\"{url}\" target=\"_blank\">{url}</a></td><td>{updated}</td></tr>\n",
                title = escape(&r.title),
                repo = escape(&r.repo),
                url = escape(&r.url),
                updated = format_timestamp(&r.updated_at),
            )
        })
        .collect();

    format!(
        r#"{heading}                    <table class="table table-striped">
                        <thead>
                            <tr><th>Title</th><th>Repository</th><th>URL</th><th>Updated At</th></tr>
                        </thead>
                        <tbody>
{rows}                        </tbody>
                    </table>
"#
    )
}
