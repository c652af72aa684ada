//! Report kinds, their data, and where their files are written

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Bundle, MonthlyGrouping, Record, Result};

/// The four report layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Per-user dashboard of issues and pull requests
    Dashboard,
    /// Open issues carrying a label, across organizations
    LabeledIssues,
    /// Monthly team achievements
    Achievements,
    /// Per-user pull requests in the contribution organizations
    Contributions,
}

impl ReportKind {
    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Dashboard => "dashboard",
            ReportKind::LabeledIssues => "labeled-issues",
            ReportKind::Achievements => "achievements",
            ReportKind::Contributions => "contributions",
        }
    }
}

/// Aggregated data handed to the renderer
#[derive(Debug, Clone)]
pub enum ReportData {
    Dashboard(BTreeMap<String, Bundle>),
    LabeledIssues {
        /// Label name as displayed (spaces, not `+`)
        label: String,
        issues: Vec<Record>,
    },
    Achievements {
        grouping: MonthlyGrouping,
        /// Month keys to render, newest first
        months: Vec<String>,
    },
    Contributions(BTreeMap<String, Vec<Record>>),
}

impl ReportData {
    /// The report kind this data was built for
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Dashboard(_) => ReportKind::Dashboard,
            ReportData::LabeledIssues { .. } => ReportKind::LabeledIssues,
            ReportData::Achievements { .. } => ReportKind::Achievements,
            ReportData::Contributions(_) => ReportKind::Contributions,
        }
    }
}

/// File name for a non-label report
pub fn report_file_name(kind: ReportKind) -> Option<&'static str> {
    match kind {
        ReportKind::Dashboard => Some("user_dashboard.html"),
        ReportKind::Achievements => Some("team_achievements.html"),
        ReportKind::Contributions => Some("kubernetes_contributions.html"),
        ReportKind::LabeledIssues => None,
    }
}

/// File name for a labeled-issue report, keyed on the configured label
pub fn labeled_file_name(label: &str) -> String {
    match label {
        "good+first+issue" => "good_first_issues.html".to_string(),
        "help+wanted" => "help_wanted.html".to_string(),
        other => {
            let slug: String = other
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
                .collect();
            format!("{}_issues.html", slug)
        }
    }
}

/// Write rendered bytes under `dir`, creating it if needed
pub fn write_report(dir: &Path, file_name: &str, html: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, html)?;
    info!(path = %path.display(), bytes = html.len(), "Report written");
    Ok(path)
}
