//! Monthly grouping of contributor activity

use std::collections::{BTreeMap, BTreeSet};

use crate::Activity;

/// Month key (`YYYY-MM`) -> identity -> activities in supplied order
pub type MonthlyGrouping = BTreeMap<String, BTreeMap<String, Vec<Activity>>>;

/// Bucket every activity by month and identity
///
/// Returns the grouping together with the distinct month keys, newest first.
/// An identity with no activity in a month has no entry for that month.
pub fn group(
    activity_by_identity: BTreeMap<String, Vec<Activity>>,
) -> (MonthlyGrouping, Vec<String>) {
    let mut grouped = MonthlyGrouping::new();
    let mut seen = BTreeSet::new();

    for (identity, activities) in activity_by_identity {
        for activity in activities {
            let month = activity.month_key();
            seen.insert(month.clone());
            grouped
                .entry(month)
                .or_default()
                .entry(identity.clone())
                .or_default()
                .push(activity);
        }
    }

    let months = seen.into_iter().rev().collect();
    (grouped, months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::activity;
    use crate::ActionKind;

    #[test]
    fn test_group_orders_months_descending() {
        let mut input = BTreeMap::new();
        input.insert(
            "alice".to_string(),
            vec![
                activity("pr", "2025-03-01T00:00:00Z", ActionKind::OpenedPr),
                activity("issue", "2025-01-15T00:00:00Z", ActionKind::CreatedIssueOpen),
            ],
        );

        let (grouped, months) = group(input);

        assert_eq!(months, vec!["2025-03", "2025-01"]);
        assert_eq!(grouped["2025-03"]["alice"].len(), 1);
        assert_eq!(grouped["2025-03"]["alice"][0].title, "pr");
        assert_eq!(grouped["2025-01"]["alice"].len(), 1);
        assert_eq!(grouped["2025-01"]["alice"][0].title, "issue");
    }

    #[test]
    fn test_group_partitions_every_activity_once() {
        let mut input = BTreeMap::new();
        input.insert(
            "alice".to_string(),
            vec![
                activity("a1", "2024-12-31T23:59:59Z", ActionKind::ClosedPr),
                activity("a2", "2025-01-01T00:00:00Z", ActionKind::OpenedPr),
                activity("a3", "2025-01-20T00:00:00Z", ActionKind::CreatedIssueClosed),
            ],
        );
        input.insert(
            "bob".to_string(),
            vec![activity("b1", "2025-01-05T00:00:00Z", ActionKind::OpenedPr)],
        );

        let (grouped, months) = group(input);

        assert_eq!(months, vec!["2025-01", "2024-12"]);
        let total: usize = grouped.values().flat_map(|m| m.values()).map(Vec::len).sum();
        assert_eq!(total, 4);

        let titles: Vec<&str> = grouped["2025-01"]["alice"]
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a2", "a3"]);
        assert!(!grouped["2024-12"].contains_key("bob"));
    }

    #[test]
    fn test_group_empty() {
        let mut input = BTreeMap::new();
        input.insert("alice".to_string(), Vec::new());

        let (grouped, months) = group(input);
        assert!(grouped.is_empty());
        assert!(months.is_empty());
    }
}
