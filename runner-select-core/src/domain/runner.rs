//! Runner domain model
//!
//! Represents a self-hosted runner registered with a repository or organization.

use std::collections::HashSet;

use serde::Deserialize;

use super::label::LabelSet;

/// A label attached to a runner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name (e.g., "self-hosted", "linux", "gpu")
    pub name: String,

    /// API identifier of the label
    #[serde(default)]
    pub id: Option<u64>,

    /// Either "read-only" (assigned by the host) or "custom"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Label {
    /// Creates a label with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind: None,
        }
    }
}

/// A runner as reported by the runners endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Runner {
    /// API identifier of the runner
    #[serde(default)]
    pub id: Option<u64>,

    /// Display name of the runner
    #[serde(default)]
    pub name: Option<String>,

    /// Operating system reported by the runner
    #[serde(default)]
    pub os: Option<String>,

    /// Current status of the runner
    pub status: RunnerStatus,

    /// Whether the runner is executing a job right now
    #[serde(default)]
    pub busy: bool,

    /// Labels attached to the runner
    pub labels: Vec<Label>,
}

impl Runner {
    /// Creates a runner snapshot from a status and label names
    pub fn new<I, S>(status: RunnerStatus, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: None,
            os: None,
            status,
            busy: false,
            labels: labels.into_iter().map(Label::named).collect(),
        }
    }

    /// Whether the runner reports itself as online
    pub fn is_online(&self) -> bool {
        self.status == RunnerStatus::Online
    }

    /// The set of label names carried by this runner
    pub fn label_names(&self) -> HashSet<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }

    /// Whether this runner is online and carries every label in `required`
    pub fn satisfies(&self, required: &LabelSet) -> bool {
        if !self.is_online() {
            return false;
        }

        let names = self.label_names();
        required.iter().all(|label| names.contains(label))
    }
}

/// Status of a runner
///
/// Busy runners still report `online`; busyness is carried separately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RunnerStatus {
    /// Runner is connected to the host
    Online,

    /// Runner is not connected
    Offline,

    /// Any status string the host may add in the future
    Other(String),
}

impl From<&str> for RunnerStatus {
    fn from(value: &str) -> Self {
        match value {
            "online" => RunnerStatus::Online,
            "offline" => RunnerStatus::Offline,
            other => RunnerStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for RunnerStatus {
    fn from(value: String) -> Self {
        RunnerStatus::from(value.as_str())
    }
}

impl std::fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerStatus::Online => write!(f, "online"),
            RunnerStatus::Offline => write!(f, "offline"),
            RunnerStatus::Other(status) => write!(f, "{}", status),
        }
    }
}

/// Body of the runners listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerList {
    /// Total number of runners registered (across all pages)
    #[serde(default)]
    pub total_count: u64,

    /// Runners on this page, in the order the host returned them
    #[serde(default)]
    pub runners: Vec<Runner>,
}

impl RunnerList {
    /// Whether the host reported more runners than this page carries
    ///
    /// Only the first page is scanned, so a primary runner further down the
    /// registry is invisible to the selection.
    pub fn is_truncated(&self) -> bool {
        self.total_count > self.runners.len() as u64
    }
}
