//! Configuration module
//!
//! Turns raw action inputs into a validated selection configuration.
//! Anything wrong here is a misconfiguration and stops the run; it is
//! never papered over with the fallback runner.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use runner_select_client::SelectRequest;
use runner_select_core::domain::label::LabelSet;
use runner_select_core::domain::repository::{Repository, RunnerScope};

/// Raw, unvalidated inputs as read from flags or the environment
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub github_token: Option<String>,
    pub primary_runner: Option<String>,
    pub fallback_runner: Option<String>,
    pub repository: Option<String>,
    pub runner_scope: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: u64,
    pub output_file: Option<PathBuf>,
}

/// Validated selection configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the API
    pub token: String,

    /// Repository whose runners are inspected
    pub repository: Repository,

    /// Repository or organization runners
    pub scope: RunnerScope,

    /// Labels the primary runner must carry
    pub primary: LabelSet,

    /// Runner used when the primary is unavailable, passed through verbatim
    pub fallback: String,

    /// API root (e.g., "https://api.github.com")
    pub api_url: String,

    /// Request timeout for the runners lookup
    pub timeout: Duration,

    /// File that receives step outputs, if any
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Builds a configuration from raw inputs
    ///
    /// Values are trimmed; blank values count as missing.
    pub fn from_inputs(inputs: Inputs) -> Result<Self> {
        let token = required(inputs.github_token, "github-token")?;
        let primary = required(inputs.primary_runner, "primary-runner")?;
        let fallback = required(inputs.fallback_runner, "fallback-runner")?;
        let repository = required(inputs.repository, "GITHUB_REPOSITORY")?;

        let primary = LabelSet::parse(&primary).context("Invalid primary-runner")?;
        let repository = Repository::parse(&repository).context("Invalid GITHUB_REPOSITORY")?;
        let scope = match optional(inputs.runner_scope) {
            Some(scope) => RunnerScope::parse(&scope).context("Invalid runner-scope")?,
            None => RunnerScope::default(),
        };
        let api_url = optional(inputs.api_url)
            .unwrap_or_else(|| runner_select_client::DEFAULT_API_URL.to_string());

        Ok(Self {
            token,
            repository,
            scope,
            primary,
            fallback,
            api_url,
            timeout: Duration::from_secs(inputs.timeout_secs),
            output_file: inputs.output_file.filter(|path| !path.as_os_str().is_empty()),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api-url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Request handed to the selector
    pub fn select_request(&self) -> SelectRequest {
        SelectRequest {
            repository: self.repository.clone(),
            scope: self.scope,
            token: self.token.clone(),
            primary: self.primary.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    optional(value).ok_or_else(|| anyhow::anyhow!("Input required and not supplied: {}", name))
}
