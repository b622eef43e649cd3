//! Runner Select Client
//!
//! Looks up the self-hosted runners registered with a repository or
//! organization and decides which runner a downstream job should use.
//!
//! # Example
//!
//! ```no_run
//! use runner_select_client::{HttpTransport, RunnerSelector};
//! use runner_select_core::domain::repository::{Repository, RunnerScope};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let selector = RunnerSelector::new(HttpTransport::new()?);
//!     let repository = Repository::parse("octo-org/octo-repo")?;
//!
//!     let list = selector
//!         .list_runners(&repository, RunnerScope::Repository, "ghp_example")
//!         .await?;
//!
//!     println!("Found {} runner(s)", list.runners.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod runners;
pub mod transport;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use runners::SelectRequest;
pub use transport::{HttpTransport, JsonResponse, JsonTransport};

/// Public API root used when no other host is configured
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Selects a runner using the hosting API's runner registry
///
/// Generic over the transport so the decision logic can run against a
/// canned response as easily as against the real API.
#[derive(Debug, Clone)]
pub struct RunnerSelector<T> {
    /// API root (e.g., "https://api.github.com")
    api_url: String,
    /// Transport used for the runners request
    transport: T,
}

impl<T: JsonTransport> RunnerSelector<T> {
    /// Create a selector against the public API
    pub fn new(transport: T) -> Self {
        Self::with_api_url(transport, DEFAULT_API_URL)
    }

    /// Create a selector against a specific API root
    ///
    /// Enterprise Server installs expose the API under `/api/v3`, which
    /// Actions passes in as `GITHUB_API_URL`.
    pub fn with_api_url(transport: T, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Get the API root
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::with_client(reqwest::Client::new())
    }

    #[test]
    fn test_selector_default_api_url() {
        let selector = RunnerSelector::new(transport());
        assert_eq!(selector.api_url(), "https://api.github.com");
    }

    #[test]
    fn test_selector_trims_trailing_slash() {
        let selector = RunnerSelector::with_api_url(transport(), "https://ghe.example.com/api/v3/");
        assert_eq!(selector.api_url(), "https://ghe.example.com/api/v3");
    }
}
