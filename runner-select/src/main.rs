//! Runner Select
//!
//! Picks the runner for a downstream job at workflow run time.
//!
//! Flow:
//! - Inputs: action inputs and the current repository, read once from the environment
//! - Selection: one runners lookup, first online runner carrying every primary label wins
//! - Outputs: `use-runner`, either the primary labels as a JSON array or the fallback
//!
//! Misconfiguration fails the step. Lookup failures never do: they degrade
//! to the fallback runner.

mod config;
mod output;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use runner_select_client::{HttpTransport, RunnerSelector};
use runner_select_core::Selection;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Inputs};
use crate::output::{OutputReporter, USE_RUNNER};

#[derive(Parser)]
#[command(name = "runner-select")]
#[command(about = "Select a primary or fallback runner for a workflow job", long_about = None)]
struct Cli {
    /// Token used to list runners
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Comma-separated labels the primary runner must carry
    #[arg(long, env = "INPUT_PRIMARY-RUNNER")]
    primary_runner: Option<String>,

    /// Runner to use when no primary runner is online
    #[arg(long, env = "INPUT_FALLBACK-RUNNER")]
    fallback_runner: Option<String>,

    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// List repository runners ("repo") or organization runners ("org")
    #[arg(long, env = "INPUT_RUNNER-SCOPE")]
    runner_scope: Option<String>,

    /// API root URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Timeout for the runners lookup, in seconds
    #[arg(long, env = "INPUT_TIMEOUT-SECONDS", default_value_t = 30)]
    timeout_secs: u64,

    /// File that receives step outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,
}

impl From<Cli> for Inputs {
    fn from(cli: Cli) -> Self {
        Inputs {
            github_token: cli.github_token,
            primary_runner: cli.primary_runner,
            fallback_runner: cli.fallback_runner,
            repository: cli.repository,
            runner_scope: cli.runner_scope,
            api_url: cli.api_url,
            timeout_secs: cli.timeout_secs,
            output_file: cli.output_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for outputs
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runner_select=info,runner_select_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(Cli::parse())?;
    info!(
        "Selecting runner for {} ({} runners), primary labels: {}",
        config.repository, config.scope, config.primary
    );

    let outcome = select(&config).await;
    let value = report::output_value(&outcome, &config.fallback);

    OutputReporter::new(config.output_file.clone())
        .set_output(USE_RUNNER, &value)
        .context("Failed to set use-runner output")?;

    Ok(())
}

/// Loads and validates configuration
fn load_config(cli: Cli) -> Result<Config> {
    let config = Config::from_inputs(cli.into())?;
    config.validate()?;
    Ok(config)
}

/// Runs the single runners lookup
async fn select(config: &Config) -> runner_select_client::Result<Selection> {
    let transport = HttpTransport::with_timeout(config.timeout)?;
    let selector = RunnerSelector::with_api_url(transport, config.api_url.as_str());

    selector.select(&config.select_request()).await
}
