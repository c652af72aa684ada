//! Search query construction
//!
//! Queries are built as space-separated qualifier lists in GitHub search
//! syntax, e.g. `author:alice is:pr is:open`. Encoding them into a URL is the
//! API client's concern.

use std::fmt;

use chrono::NaiveDate;

/// Whether a search targets issues or pull requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Issue,
    Pr,
}

/// Open/closed filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Open,
    Closed,
}

/// A GitHub issue search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    qualifiers: Vec<String>,
}

impl SearchQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to items authored by `user`
    pub fn author(self, user: &str) -> Self {
        self.with(format!("author:{}", user))
    }

    /// Restrict to items assigned to `user`
    pub fn assignee(self, user: &str) -> Self {
        self.with(format!("assignee:{}", user))
    }

    /// Restrict to repositories owned by `org`
    pub fn org(self, org: &str) -> Self {
        self.with(format!("org:{}", org))
    }

    /// Restrict to items carrying `label` (the label name, spaces allowed)
    pub fn label(self, label: &str) -> Self {
        self.with(format!("label:\"{}\"", label))
    }

    /// Restrict to issues or pull requests
    pub fn kind(self, kind: ItemKind) -> Self {
        self.with(match kind {
            ItemKind::Issue => "is:issue".to_string(),
            ItemKind::Pr => "is:pr".to_string(),
        })
    }

    /// Restrict by open/closed state
    pub fn state(self, state: ItemState) -> Self {
        self.with(match state {
            ItemState::Open => "is:open".to_string(),
            ItemState::Closed => "is:closed".to_string(),
        })
    }

    /// Restrict to items closed on or after `date`
    pub fn closed_since(self, date: NaiveDate) -> Self {
        self.with(format!("closed:>={}", date.format("%Y-%m-%d")))
    }

    fn with(mut self, qualifier: String) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    /// Open issues assigned to `user`
    pub fn assigned_issues(user: &str) -> Self {
        Self::new()
            .assignee(user)
            .kind(ItemKind::Issue)
            .state(ItemState::Open)
    }

    /// Issues authored by `user` in the given state
    pub fn created_issues(user: &str, state: ItemState) -> Self {
        Self::new().author(user).kind(ItemKind::Issue).state(state)
    }

    /// Open pull requests authored by `user`
    pub fn open_prs(user: &str) -> Self {
        Self::new()
            .author(user)
            .kind(ItemKind::Pr)
            .state(ItemState::Open)
    }

    /// Pull requests authored by `user` and closed on or after `since`
    pub fn closed_prs(user: &str, since: NaiveDate) -> Self {
        Self::new()
            .author(user)
            .kind(ItemKind::Pr)
            .state(ItemState::Closed)
            .closed_since(since)
    }

    /// Open issues in `org` carrying `label`
    pub fn labeled_issues(org: &str, label: &str) -> Self {
        Self::new()
            .org(org)
            .label(label)
            .kind(ItemKind::Issue)
            .state(ItemState::Open)
    }

    /// All pull requests authored by `user` in `org`
    pub fn org_prs(org: &str, user: &str) -> Self {
        Self::new().org(org).author(user).kind(ItemKind::Pr)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualifiers.join(" "))
    }
}

/// Decode a configured label into its name
///
/// Labels are configured URL-style (`good+first+issue`); the label itself is
/// `good first issue`.
pub fn label_name(configured: &str) -> String {
    configured.replace('+', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_queries() {
        assert_eq!(
            SearchQuery::assigned_issues("alice").to_string(),
            "assignee:alice is:issue is:open"
        );
        assert_eq!(
            SearchQuery::created_issues("alice", ItemState::Closed).to_string(),
            "author:alice is:issue is:closed"
        );
        assert_eq!(
            SearchQuery::open_prs("alice").to_string(),
            "author:alice is:pr is:open"
        );
        assert_eq!(
            SearchQuery::org_prs("kubernetes", "alice").to_string(),
            "org:kubernetes author:alice is:pr"
        );
    }

    #[test]
    fn test_closed_prs_window() {
        let since = NaiveDate::from_ymd_opt(2024, 10, 17).unwrap();
        assert_eq!(
            SearchQuery::closed_prs("bob", since).to_string(),
            "author:bob is:pr is:closed closed:>=2024-10-17"
        );
    }

    #[test]
    fn test_labeled_issues_quotes_label() {
        let query = SearchQuery::labeled_issues("rust-lang", &label_name("good+first+issue"));
        assert_eq!(
            query.to_string(),
            "org:rust-lang label:\"good first issue\" is:issue is:open"
        );
    }
}
