//! GitHub credential loading
//!
//! The token is read from the `GITHUB_TOKEN` environment variable. When that is
//! unset or empty, `~/.config/ghdigest/secrets.toml` is consulted:
//!
//! ```toml
//! [github]
//! token = "ghp_..."
//! ```
//!
//! The secrets file must not be readable by group or others (0600 on Unix).
//! Failing both sources is a startup error raised before any request is made.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Contents of the secrets file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Secrets {
    pub github: GitHubSecrets,
}

/// GitHub section of the secrets file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubSecrets {
    /// Personal access token
    pub token: Option<String>,
}

impl Secrets {
    /// Load the secrets file from its default location, if present
    pub fn load() -> Result<Self> {
        match Self::default_secrets_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load a secrets file, rejecting group/world readable files on Unix
    pub fn load_from_file(path: &Path) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(path)?.permissions().mode();
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))
    }

    /// `~/.config/ghdigest/secrets.toml` on Unix
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ghdigest").join("secrets.toml"))
    }
}

/// Resolve the GitHub token from the environment, then the secrets file
pub fn github_token() -> Result<String> {
    let env_value = std::env::var(TOKEN_ENV).ok();
    if let Some(token) = non_empty(env_value.as_deref()) {
        debug!("Using GitHub token from {} environment variable", TOKEN_ENV);
        return Ok(token);
    }

    let secrets = Secrets::load()?;
    resolve_token(None, &secrets)
}

/// Pick the first non-empty token, preferring the environment value
pub fn resolve_token(env_value: Option<&str>, secrets: &Secrets) -> Result<String> {
    if let Some(token) = non_empty(env_value) {
        return Ok(token);
    }
    if let Some(token) = non_empty(secrets.github.token.as_deref()) {
        debug!("Using GitHub token from secrets file");
        return Ok(token);
    }
    Err(Error::MissingCredential(format!(
        "set the {} environment variable or add [github] token to {}",
        TOKEN_ENV,
        Secrets::default_secrets_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "secrets.toml".to_string())
    )))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}
