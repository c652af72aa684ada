//! ghdigest CLI - static HTML dashboards of a team's GitHub activity
//!
//! Queries GitHub search for the configured users and organizations and
//! writes one report per run into the output directory.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use ghdigest_core::config::DEFAULT_CONFIG_PATH;
use ghdigest_core::{secrets, ReportConfig};
use ghdigest_github::GitHubClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ModeArgs;

/// ghdigest: GitHub activity dashboards for a team
#[derive(Parser, Debug)]
#[command(name = "ghdigest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to the JSON report configuration
    #[arg(long, env = "GHDIGEST_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory to write reports into (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    mode: ModeArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let kind = cli.mode.kind();

    let config = ReportConfig::load_from_file(&cli.config)?.with_cli_overrides(cli.output_dir);

    if cli.verbose {
        tracing::info!(
            config = %cli.config.display(),
            users = config.users.len(),
            orgs = config.orgs.len(),
            labels = config.labels.len(),
            output_dir = %config.output_dir.display(),
            "Configuration loaded"
        );
    }

    let token = secrets::github_token()?;
    let client = GitHubClient::new(token)?.with_retry_interval(config.rate_limit_retry);

    let written = commands::generate(kind, &config, &client).await?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
