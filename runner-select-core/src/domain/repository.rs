//! Repository coordinates and runner scope

use crate::error::ParseError;

/// A repository on the hosting service, identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// User or organization that owns the repository
    pub owner: String,

    /// Repository name
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses the `owner/repo` form used by `GITHUB_REPOSITORY`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidRepository(input.to_string());

        let (owner, name) = input.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Where runners are registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunnerScope {
    /// Runners registered directly on the repository
    #[default]
    Repository,

    /// Runners shared across the owning organization
    Organization,
}

impl RunnerScope {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "repo" | "repository" => Ok(RunnerScope::Repository),
            "org" | "organization" => Ok(RunnerScope::Organization),
            _ => Err(ParseError::InvalidScope(input.to_string())),
        }
    }

    /// Path of the runners listing endpoint, relative to the API root
    pub fn runners_path(&self, repository: &Repository) -> String {
        match self {
            RunnerScope::Repository => format!(
                "/repos/{}/{}/actions/runners",
                repository.owner, repository.name
            ),
            RunnerScope::Organization => format!("/orgs/{}/actions/runners", repository.owner),
        }
    }
}

impl std::fmt::Display for RunnerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerScope::Repository => write!(f, "repo"),
            RunnerScope::Organization => write!(f, "org"),
        }
    }
}
