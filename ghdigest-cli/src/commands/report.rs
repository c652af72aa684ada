//! Report generation for each CLI mode

use std::path::PathBuf;

use clap::Args;
use ghdigest_core::report::{labeled_file_name, report_file_name, write_report};
use ghdigest_core::{
    activity, labeled, query, render, AggregateOptions, Aggregator, IssueSearch, ReportConfig,
    ReportData, ReportKind,
};

/// Report selection flags; at most one may be given
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Generate issue listings for each configured label instead of the dashboard
    #[arg(long, visible_alias = "good-first-issues")]
    pub labeled_issues: bool,

    /// Generate the monthly team achievements report
    #[arg(long)]
    pub achievements: bool,

    /// Generate the contribution table for the contribution organizations
    #[arg(long)]
    pub contributions: bool,
}

impl ModeArgs {
    /// The report kind selected by the flags (dashboard when none is set)
    pub fn kind(&self) -> ReportKind {
        if self.labeled_issues {
            ReportKind::LabeledIssues
        } else if self.achievements {
            ReportKind::Achievements
        } else if self.contributions {
            ReportKind::Contributions
        } else {
            ReportKind::Dashboard
        }
    }
}

/// Fetch, render and write the report for `kind`
///
/// Returns the paths written. Nothing is written for a report whose fetch or
/// render fails; for labeled issues, files for earlier labels remain.
pub async fn generate<S: IssueSearch + ?Sized>(
    kind: ReportKind,
    config: &ReportConfig,
    search: &S,
) -> anyhow::Result<Vec<PathBuf>> {
    let aggregator = Aggregator::new(search, AggregateOptions::from_config(config));
    tracing::info!(report = kind.name(), "Generating report");

    let mut written = Vec::new();
    match kind {
        ReportKind::LabeledIssues => {
            for label in &config.labels {
                let issues = labeled::collect(search, &config.orgs, label).await?;
                let data = ReportData::LabeledIssues {
                    label: query::label_name(label),
                    issues,
                };
                let html = render(kind, &data)?;
                written.push(write_report(&config.output_dir, &labeled_file_name(label), &html)?);
            }
        }
        ReportKind::Dashboard => {
            let data = ReportData::Dashboard(aggregator.build_bundles(&config.users).await?);
            written.push(emit(&data, config)?);
        }
        ReportKind::Achievements => {
            let by_user = aggregator.fetch_activity(&config.users).await?;
            let (grouping, months) = activity::group(by_user);
            written.push(emit(&ReportData::Achievements { grouping, months }, config)?);
        }
        ReportKind::Contributions => {
            let prs = aggregator
                .collect_contributions(&config.users, &config.contribution_orgs)
                .await?;
            written.push(emit(&ReportData::Contributions(prs), config)?);
        }
    }

    Ok(written)
}

/// Render a single-file report and write it to its fixed file name
fn emit(data: &ReportData, config: &ReportConfig) -> anyhow::Result<PathBuf> {
    let kind = data.kind();
    let html = render(kind, data)?;
    let file_name = report_file_name(kind)
        .ok_or_else(|| anyhow::anyhow!("{} report has no fixed file name", kind.name()))?;
    Ok(write_report(&config.output_dir, file_name, &html)?)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use async_trait::async_trait;
    use ghdigest_core::{Record, SearchQuery};

    use super::*;

    /// Serves canned records keyed by query text, failing on selected queries
    #[derive(Default)]
    struct FixtureSearch {
        responses: HashMap<String, Vec<Record>>,
        failing: HashSet<String>,
    }

    impl FixtureSearch {
        fn new(responses: HashMap<String, Vec<Record>>) -> Self {
            Self {
                responses,
                failing: HashSet::new(),
            }
        }

        fn fail_on(mut self, query: SearchQuery) -> Self {
            self.failing.insert(query.to_string());
            self
        }
    }

    #[async_trait]
    impl IssueSearch for FixtureSearch {
        async fn search(&self, query: &SearchQuery) -> ghdigest_core::Result<Vec<Record>> {
            let key = query.to_string();
            if self.failing.contains(&key) {
                return Err(ghdigest_core::Error::search(std::io::Error::other(format!(
                    "search failed for {}",
                    key
                ))));
            }
            Ok(self.responses.get(&key).cloned().unwrap_or_default())
        }
    }

    fn record(title: &str, created_at: &str) -> Record {
        let ts = created_at.parse().unwrap();
        Record {
            title: title.to_string(),
            url: format!("https://github.com/o/r/issues/{}", title),
            repo: "r".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn config(dir: &std::path::Path, labels: &[&str]) -> ReportConfig {
        let labels: Vec<String> = labels.iter().map(|l| format!("\"{}\"", l)).collect();
        let json = format!(
            r#"{{"users": ["alice"], "orgs": ["org-a", "org-b"], "labels": [{}],
                "identity_delay": "0s", "output_dir": {:?}}}"#,
            labels.join(", "),
            dir.display().to_string()
        );
        ReportConfig::from_json(&json).unwrap()
    }

    #[test]
    fn test_mode_defaults_to_dashboard() {
        assert_eq!(ModeArgs::default().kind(), ReportKind::Dashboard);
        let args = ModeArgs {
            achievements: true,
            ..Default::default()
        };
        assert_eq!(args.kind(), ReportKind::Achievements);
    }

    #[tokio::test]
    async fn test_labeled_issue_routing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &["help+wanted", "good+first+issue"]);

        let mut responses = HashMap::new();
        responses.insert(
            SearchQuery::labeled_issues("org-a", "help wanted").to_string(),
            vec![record("older", "2025-01-01T00:00:00Z")],
        );
        responses.insert(
            SearchQuery::labeled_issues("org-b", "help wanted").to_string(),
            vec![record("newer", "2025-02-01T00:00:00Z")],
        );
        let search = FixtureSearch::new(responses);

        let written = generate(ReportKind::LabeledIssues, &config, &search)
            .await
            .unwrap();

        assert_eq!(
            written,
            vec![
                tmp.path().join("help_wanted.html"),
                tmp.path().join("good_first_issues.html"),
            ]
        );
        let html = std::fs::read_to_string(tmp.path().join("help_wanted.html")).unwrap();
        assert!(html.find("newer").unwrap() < html.find("older").unwrap());
        let empty = std::fs::read_to_string(tmp.path().join("good_first_issues.html")).unwrap();
        assert!(empty.contains("No issues found"));
    }

    #[tokio::test]
    async fn test_achievements_written() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &[]);

        let mut responses = HashMap::new();
        responses.insert(
            SearchQuery::open_prs("alice").to_string(),
            vec![record("pr", "2025-03-01T00:00:00Z")],
        );
        responses.insert(
            SearchQuery::created_issues("alice", query::ItemState::Open).to_string(),
            vec![record("issue", "2025-01-15T00:00:00Z")],
        );
        let search = FixtureSearch::new(responses);

        let written = generate(ReportKind::Achievements, &config, &search)
            .await
            .unwrap();

        assert_eq!(written, vec![tmp.path().join("team_achievements.html")]);
        let html = std::fs::read_to_string(&written[0]).unwrap();
        assert!(html.find(">2025-03<").unwrap() < html.find(">2025-01<").unwrap());
    }

    #[tokio::test]
    async fn test_dashboard_written() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &[]);
        let search = FixtureSearch::default();

        let written = generate(ReportKind::Dashboard, &config, &search).await.unwrap();

        assert_eq!(written, vec![tmp.path().join("user_dashboard.html")]);
        let html = std::fs::read_to_string(&written[0]).unwrap();
        assert!(html.contains("heading-alice"));
    }

    #[tokio::test]
    async fn test_failed_search_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("site");
        let config = config(&out, &[]);
        let search = FixtureSearch::default().fail_on(SearchQuery::assigned_issues("alice"));

        let err = generate(ReportKind::Dashboard, &config, &search)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ghdigest_core::Error>(),
            Some(ghdigest_core::Error::Search(_))
        ));
        assert!(!out.join("user_dashboard.html").exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_dir_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = config(file.path(), &[]);
        let search = FixtureSearch::default();

        let err = generate(ReportKind::Dashboard, &config, &search)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ghdigest_core::Error>(),
            Some(ghdigest_core::Error::Io(_))
        ));
        assert!(file.path().is_file());
    }

    #[tokio::test]
    async fn test_labeled_failure_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &["help+wanted", "good+first+issue"]);
        let search = FixtureSearch::default()
            .fail_on(SearchQuery::labeled_issues("org-b", "good first issue"));

        let result = generate(ReportKind::LabeledIssues, &config, &search).await;

        assert!(result.is_err());
        assert!(tmp.path().join("help_wanted.html").exists());
        assert!(!tmp.path().join("good_first_issues.html").exists());
    }
}
