//! Runner selection
//!
//! Decides between the primary label set and the fallback runner from a
//! snapshot of registered runners.

use crate::domain::label::{LABEL_SEPARATOR, LabelSet};
use crate::domain::runner::Runner;

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Label tokens the downstream job should run on
    pub use_runner: Vec<String>,

    /// Whether an online runner carried every primary label
    pub primary_is_online: bool,
}

impl Selection {
    /// JSON array form of `use_runner`, e.g. `["self-hosted","linux"]`
    ///
    /// Workflows decode this with `fromJSON(...)` to get a list for `runs-on`.
    pub fn use_runner_json(&self) -> String {
        serde_json::Value::from(self.use_runner.clone()).to_string()
    }
}

/// Picks the runner labels for a downstream job
///
/// Runners are scanned in the order given and the first one that is online
/// and carries every primary label wins. Either way the chosen value is
/// handled in its comma-joined form and split back into tokens, so a
/// comma-joined fallback such as `self-hosted,arm64` also yields a list.
pub fn choose(runners: &[Runner], primary: &LabelSet, fallback: &str) -> Selection {
    let matched = runners.iter().find(|runner| runner.satisfies(primary));

    let (chosen, primary_is_online) = match matched {
        Some(_) => (primary.to_csv(), true),
        None => (fallback.to_string(), false),
    };

    Selection {
        use_runner: chosen.split(LABEL_SEPARATOR).map(str::to_string).collect(),
        primary_is_online,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::runner::RunnerStatus;

    fn primary() -> LabelSet {
        LabelSet::parse("self-hosted,linux").unwrap()
    }

    fn decode(json: &str) -> Vec<String> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_online_superset_selects_primary() {
        let runners = vec![Runner::new(
            RunnerStatus::Online,
            ["self-hosted", "linux", "gpu"],
        )];

        let selection = choose(&runners, &primary(), "ubuntu-latest");

        assert!(selection.primary_is_online);
        assert_eq!(selection.use_runner_json(), r#"["self-hosted","linux"]"#);
    }

    #[test]
    fn test_offline_runner_selects_fallback() {
        let runners = vec![Runner::new(RunnerStatus::Offline, ["self-hosted", "linux"])];

        let selection = choose(&runners, &primary(), "ubuntu-latest");

        assert!(!selection.primary_is_online);
        assert_eq!(selection.use_runner_json(), r#"["ubuntu-latest"]"#);
    }

    #[test]
    fn test_empty_runner_list_selects_fallback() {
        let selection = choose(&[], &primary(), "ubuntu-latest");

        assert!(!selection.primary_is_online);
        assert_eq!(selection.use_runner, vec!["ubuntu-latest".to_string()]);
    }

    #[test]
    fn test_fallback_is_split_on_commas() {
        let selection = choose(&[], &primary(), "self-hosted,arm64");

        assert_eq!(decode(&selection.use_runner_json()), ["self-hosted", "arm64"]);
    }

    #[test]
    fn test_fallback_tokens_are_not_trimmed() {
        let selection = choose(&[], &primary(), "a, b");

        assert_eq!(selection.use_runner, ["a", " b"]);
    }

    #[test]
    fn test_partial_label_match_is_not_enough() {
        let runners = vec![
            Runner::new(RunnerStatus::Online, ["self-hosted"]),
            Runner::new(RunnerStatus::Online, ["linux", "x64"]),
        ];

        let selection = choose(&runners, &primary(), "ubuntu-latest");

        assert!(!selection.primary_is_online);
    }

    #[test]
    fn test_match_position_does_not_change_result() {
        let matching = Runner::new(RunnerStatus::Online, ["linux", "self-hosted"]);
        let offline = Runner::new(RunnerStatus::Offline, ["self-hosted", "linux"]);
        let other = Runner::new(RunnerStatus::Online, ["windows"]);

        let first = choose(
            &[matching.clone(), offline.clone(), other.clone()],
            &primary(),
            "ubuntu-latest",
        );
        let last = choose(&[other, offline, matching], &primary(), "ubuntu-latest");

        assert_eq!(first, last);
        assert_eq!(first.use_runner, ["self-hosted", "linux"]);
    }

    #[test]
    fn test_multiple_matches_report_primary_once() {
        let runners = vec![
            Runner::new(RunnerStatus::Online, ["self-hosted", "linux"]),
            Runner::new(RunnerStatus::Online, ["self-hosted", "linux", "gpu"]),
        ];

        let selection = choose(&runners, &primary(), "ubuntu-latest");

        assert_eq!(selection.use_runner, ["self-hosted", "linux"]);
    }

    #[test]
    fn test_choose_is_repeatable() {
        let runners = vec![Runner::new(RunnerStatus::Online, ["self-hosted", "linux"])];
        let labels = primary();

        let first = choose(&runners, &labels, "ubuntu-latest");
        let second = choose(&runners, &labels, "ubuntu-latest");

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_escapes_labels() {
        let selection = Selection {
            use_runner: vec!["quote\"label".to_string()],
            primary_is_online: false,
        };

        assert_eq!(decode(&selection.use_runner_json()), ["quote\"label"]);
    }
}
