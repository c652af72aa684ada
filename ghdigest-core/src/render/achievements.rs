//! Monthly team achievements

use std::collections::BTreeMap;

use super::html::{escape, escape_id, format_date, page};
use crate::{ActionKind, Activity, Error, MonthlyGrouping, Result};

fn badge_caption(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::CreatedIssueOpen => "Open Issues",
        ActionKind::CreatedIssueClosed => "Closed Issues",
        ActionKind::OpenedPr => "Opened PRs",
        ActionKind::ClosedPr => "Closed PRs",
    }
}

// Light badges need dark text to stay readable.
fn badge_text_class(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::CreatedIssueClosed | ActionKind::OpenedPr => " text-dark",
        ActionKind::CreatedIssueOpen | ActionKind::ClosedPr => "",
    }
}

pub(super) fn render(grouping: &MonthlyGrouping, months: &[String]) -> Result<String> {
    let mut sections = String::new();

    for month in months {
        let users = grouping
            .get(month)
            .ok_or_else(|| Error::Render(format!("month {} has no activity entry", month)))?;
        sections.push_str(&render_month(month, users));
    }

    let body = format!("    <h1 class=\"mb-4\">Team Achievements by Month</h1>\n{}", sections);
    Ok(page("Team Achievements", "", true, &body))
}

fn render_month(month: &str, users: &BTreeMap<String, Vec<Activity>>) -> String {
    let month = escape(month);
    let cards: String = users
        .iter()
        .map(|(user, activities)| render_card(&month, user, activities))
        .collect();
    format!("    <h2 class=\"mt-4\">{month}</h2>\n{cards}")
}

fn render_card(month: &str, user: &str, activities: &[Activity]) -> String {
    let target = format!("collapse-{}-{}", month, escape_id(user));

    let badges: String = ActionKind::ALL
        .iter()
        .map(|&kind| {
            let count = activities.iter().filter(|a| a.action == kind).count();
            format!(
                "                <span class=\"badge bg-{}{}\">{}: {}</span>\n",
                kind.badge_class(),
                badge_text_class(kind),
                badge_caption(kind),
                count
            )
        })
        .collect();

    let items: String = activities
        .iter()
        .map(|a| {
            format!(
                r#"                <li class="list-group-item">
                    <span class="badge bg-{class}">{label}</span>
                    <a href="{url}" target="_blank">{title}</a>
                    <span class="text-muted">in {repo} on {date}</span>
                </li>
"#,
                class = a.action.badge_class(),
                label = a.action.label(),
                url = escape(&a.url),
                title = escape(&a.title),
                repo = escape(&a.repo),
                date = format_date(&a.timestamp),
            )
        })
        .collect();

    format!(
        r##"    <div class="card mb-2">
        <div class="card-header">
            <h5 class="mb-0">
                <button class="btn btn-link text-decoration-none" data-bs-toggle="collapse" data-bs-target="#{target}" aria-expanded="false" aria-controls="{target}">
                    {user}
                </button>
            </h5>
            <div class="mt-2">
{badges}            </div>
        </div>
        <div id="{target}" class="collapse">
            <ul class="list-group list-group-flush">
{items}            </ul>
        </div>
    </div>
"##,
        user = escape(user),
    )
}
