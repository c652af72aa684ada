//! HTML report rendering
//!
//! Rendering is pure: the same [`ReportData`] always yields the same bytes,
//! and nothing here touches the network or the filesystem.

mod achievements;
mod contributions;
mod dashboard;
pub mod html;
mod issues;

use crate::{Error, ReportData, ReportKind, Result};

/// Render `data` using the layout for `kind`
///
/// Fails with [`Error::Render`] when the data was built for a different
/// report kind, or is internally inconsistent (e.g. a month key with no
/// grouping entry).
pub fn render(kind: ReportKind, data: &ReportData) -> Result<Vec<u8>> {
    let html = match (kind, data) {
        (ReportKind::Dashboard, ReportData::Dashboard(bundles)) => dashboard::render(bundles),
        (ReportKind::LabeledIssues, ReportData::LabeledIssues { label, issues }) => {
            issues::render(label, issues)
        }
        (ReportKind::Achievements, ReportData::Achievements { grouping, months }) => {
            achievements::render(grouping, months)?
        }
        (ReportKind::Contributions, ReportData::Contributions(prs)) => {
            contributions::render(prs)
        }
        (kind, data) => {
            return Err(Error::Render(format!(
                "{} report cannot render {} data",
                kind.name(),
                data.kind().name()
            )))
        }
    };
    Ok(html.into_bytes())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::activity::group;
    use crate::model::fixtures::{activity, record};
    use crate::{ActionKind, Bundle};

    #[test]
    fn test_kind_mismatch() {
        let data = ReportData::Dashboard(BTreeMap::new());
        let result = render(ReportKind::Achievements, &data);
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut bundles = BTreeMap::new();
        for user in ["carol", "alice", "bob"] {
            bundles.insert(
                user.to_string(),
                Bundle {
                    assigned_issues: vec![record("Fix", "widgets", "2025-02-01T00:00:00Z")],
                    closed_prs: vec![record("Merge", "gadgets", "2025-01-01T00:00:00Z")],
                    ..Default::default()
                },
            );
        }
        let data = ReportData::Dashboard(bundles);

        let first = render(ReportKind::Dashboard, &data).unwrap();
        let second = render(ReportKind::Dashboard, &data.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_achievements_deterministic() {
        let mut input = BTreeMap::new();
        input.insert(
            "alice".to_string(),
            vec![
                activity("pr", "2025-03-01T00:00:00Z", ActionKind::OpenedPr),
                activity("issue", "2025-01-15T00:00:00Z", ActionKind::CreatedIssueOpen),
            ],
        );
        input.insert(
            "bob".to_string(),
            vec![activity("fix", "2025-03-09T00:00:00Z", ActionKind::ClosedPr)],
        );
        let (grouping, months) = group(input.clone());
        let (grouping2, months2) = group(input);

        let a = render(
            ReportKind::Achievements,
            &ReportData::Achievements { grouping, months },
        )
        .unwrap();
        let b = render(
            ReportKind::Achievements,
            &ReportData::Achievements { grouping: grouping2, months: months2 },
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_utf8_html() {
        let data = ReportData::LabeledIssues {
            label: "help wanted".to_string(),
            issues: vec![record("Ünïcode title", "r", "2025-01-01T00:00:00Z")],
        };
        let bytes = render(ReportKind::LabeledIssues, &data).unwrap();
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Ünïcode title"));
    }
}
