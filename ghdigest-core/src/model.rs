//! Records, activities and per-identity bundles

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized issue or pull request returned by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Issue or PR title
    pub title: String,
    /// Browser URL of the issue or PR
    pub url: String,
    /// Short repository name (last path segment of the API repository URL)
    pub repo: String,
    /// When the issue or PR was created
    pub created_at: DateTime<Utc>,
    /// When the issue or PR was last updated
    pub updated_at: DateTime<Utc>,
}

/// What a contributor did to produce an [`Activity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenedPr,
    ClosedPr,
    CreatedIssueOpen,
    CreatedIssueClosed,
}

impl ActionKind {
    /// All action kinds in badge display order
    pub const ALL: [ActionKind; 4] = [
        ActionKind::CreatedIssueOpen,
        ActionKind::CreatedIssueClosed,
        ActionKind::OpenedPr,
        ActionKind::ClosedPr,
    ];

    /// Stable identifier, e.g. `opened_pr`
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::OpenedPr => "opened_pr",
            ActionKind::ClosedPr => "closed_pr",
            ActionKind::CreatedIssueOpen => "created_issue_open",
            ActionKind::CreatedIssueClosed => "created_issue_closed",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::OpenedPr => "Opened PR",
            ActionKind::ClosedPr => "Closed PR",
            ActionKind::CreatedIssueOpen => "Created Issue (Open)",
            ActionKind::CreatedIssueClosed => "Created Issue (Closed)",
        }
    }

    /// Bootstrap contextual color used for this kind's badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ActionKind::CreatedIssueOpen => "primary",
            ActionKind::CreatedIssueClosed => "info",
            ActionKind::OpenedPr => "warning",
            ActionKind::ClosedPr => "success",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record tagged with the action that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub url: String,
    pub repo: String,
    pub timestamp: DateTime<Utc>,
    pub action: ActionKind,
}

impl Activity {
    /// Tag a record with an action kind, using its creation time as the timestamp
    pub fn from_record(record: Record, action: ActionKind) -> Self {
        Self {
            title: record.title,
            url: record.url,
            repo: record.repo,
            timestamp: record.created_at,
            action,
        }
    }

    /// Month bucket for this activity, formatted `YYYY-MM`
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }
}

/// Dashboard category slots of a [`Bundle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AssignedIssues,
    CreatedIssues,
    OpenPrs,
    ClosedPrs,
}

impl Category {
    /// All categories in dashboard order
    pub const ALL: [Category; 4] = [
        Category::AssignedIssues,
        Category::CreatedIssues,
        Category::OpenPrs,
        Category::ClosedPrs,
    ];

    /// Category name as used in bundle keys
    pub fn key(&self) -> &'static str {
        match self {
            Category::AssignedIssues => "assigned_issues",
            Category::CreatedIssues => "created_issues",
            Category::OpenPrs => "open_prs",
            Category::ClosedPrs => "closed_prs",
        }
    }
}

/// Categorized search results for a single identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub assigned_issues: Vec<Record>,
    pub created_issues: Vec<Record>,
    pub open_prs: Vec<Record>,
    pub closed_prs: Vec<Record>,
}

impl Bundle {
    /// Records stored under a category
    pub fn get(&self, category: Category) -> &[Record] {
        match category {
            Category::AssignedIssues => &self.assigned_issues,
            Category::CreatedIssues => &self.created_issues,
            Category::OpenPrs => &self.open_prs,
            Category::ClosedPrs => &self.closed_prs,
        }
    }
}
