//! Runner lookup and selection

use runner_select_core::domain::label::LabelSet;
use runner_select_core::domain::repository::{Repository, RunnerScope};
use runner_select_core::domain::runner::RunnerList;
use runner_select_core::{Selection, choose};
use tracing::{debug, info, warn};

use crate::RunnerSelector;
use crate::error::{ClientError, Result};
use crate::transport::JsonTransport;

/// Inputs for a single selection
#[derive(Debug, Clone)]
pub struct SelectRequest {
    /// Repository whose runners are inspected
    pub repository: Repository,

    /// Whether to list repository or organization runners
    pub scope: RunnerScope,

    /// Bearer token for the API
    pub token: String,

    /// Labels the primary runner must carry
    pub primary: LabelSet,

    /// Runner identifier used when no primary runner is online
    pub fallback: String,
}

impl<T: JsonTransport> RunnerSelector<T> {
    // =============================================================================
    // Runner Query
    // =============================================================================

    /// URL of the runners listing for `repository`
    pub fn runners_url(&self, repository: &Repository, scope: RunnerScope) -> String {
        format!("{}{}", self.api_url, scope.runners_path(repository))
    }

    /// List the runners registered for `repository`
    ///
    /// Issues exactly one request. Any status other than 200 is an
    /// [`ClientError::ApiError`]; no retry is attempted.
    pub async fn list_runners(
        &self,
        repository: &Repository,
        scope: RunnerScope,
        token: &str,
    ) -> Result<RunnerList> {
        let url = self.runners_url(repository, scope);
        info!("Fetching runners from {}", url);

        let response = self.transport.get_json(&url, token).await?;

        if let Some(body) = &response.body {
            info!("Response: {}", body);
        }

        if response.status != 200 {
            return Err(ClientError::api_error(
                response.status,
                format!(
                    "Failed to get runners. Status code: {}",
                    response.status
                ),
            ));
        }

        let body = response
            .body
            .ok_or_else(|| ClientError::ParseError("Runners response had no body".to_string()))?;

        serde_json::from_value(body)
            .map_err(|e| ClientError::ParseError(format!("Invalid runners response: {}", e)))
    }

    // =============================================================================
    // Selection
    // =============================================================================

    /// Choose between the primary labels and the fallback runner
    ///
    /// # Example
    /// ```no_run
    /// # use runner_select_client::{HttpTransport, RunnerSelector, SelectRequest};
    /// # use runner_select_core::domain::label::LabelSet;
    /// # use runner_select_core::domain::repository::{Repository, RunnerScope};
    /// # async fn example() -> anyhow::Result<()> {
    /// let selector = RunnerSelector::new(HttpTransport::new()?);
    /// let selection = selector
    ///     .select(&SelectRequest {
    ///         repository: Repository::parse("octo-org/octo-repo")?,
    ///         scope: RunnerScope::Repository,
    ///         token: "ghp_example".to_string(),
    ///         primary: LabelSet::parse("self-hosted,linux")?,
    ///         fallback: "ubuntu-latest".to_string(),
    ///     })
    ///     .await?;
    /// println!("{}", selection.use_runner_json());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn select(&self, request: &SelectRequest) -> Result<Selection> {
        let list = self
            .list_runners(&request.repository, request.scope, &request.token)
            .await?;
        if list.is_truncated() {
            warn!(
                "Only {} of {} runner(s) were returned; runners beyond the first page are not considered",
                list.runners.len(),
                list.total_count
            );
        }
        debug!(
            "Scanning {} runner(s) for labels {}",
            list.runners.len(),
            request.primary
        );

        Ok(choose(&list.runners, &request.primary, &request.fallback))
    }
}
