//! Report configuration
//!
//! Loaded once at startup from a JSON file (`config.json` by default):
//!
//! ```json
//! {
//!   "users": ["alice", "bob"],
//!   "orgs": ["kubernetes"],
//!   "labels": ["good+first+issue", "help+wanted"]
//! }
//! ```
//!
//! Any key may be left out: `users`, `orgs` and `labels` default to empty
//! lists and the rest to the values below. Only a missing file or malformed
//! JSON is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default location of the report configuration
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// GitHub users reported on
    #[serde(default)]
    pub users: Vec<String>,

    /// Organizations searched for labeled issues
    #[serde(default)]
    pub orgs: Vec<String>,

    /// Labels, URL-style (`good+first+issue`)
    #[serde(default)]
    pub labels: Vec<String>,

    /// Organizations covered by the contribution report
    #[serde(default = "default_contribution_orgs")]
    pub contribution_orgs: Vec<String>,

    /// Lookback for closed pull requests
    #[serde(default = "default_closed_pr_window", with = "humantime_serde")]
    pub closed_pr_window: Duration,

    /// Pause between identities
    #[serde(default = "default_identity_delay", with = "humantime_serde")]
    pub identity_delay: Duration,

    /// Wait before retrying a rate-limited request
    #[serde(default = "default_rate_limit_retry", with = "humantime_serde")]
    pub rate_limit_retry: Duration,

    /// Directory report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_contribution_orgs() -> Vec<String> {
    vec!["kubernetes".to_string(), "kubernetes-sigs".to_string()]
}

fn default_closed_pr_window() -> Duration {
    Duration::from_secs(365 * 24 * 60 * 60)
}

fn default_identity_delay() -> Duration {
    Duration::from_secs(30)
}

fn default_rate_limit_retry() -> Duration {
    Duration::from_secs(60)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl ReportConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file or malformed JSON is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Parse configuration from JSON text
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}
