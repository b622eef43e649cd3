//! Step outputs
//!
//! Writes outputs in the format the Actions runner reads from the file
//! named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// Name of the output carrying the selected runner
pub const USE_RUNNER: &str = "use-runner";

/// Destination for step outputs
#[derive(Debug, Clone)]
pub struct OutputReporter {
    /// Output file; stdout when absent (e.g., running outside Actions)
    path: Option<PathBuf>,
}

impl OutputReporter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Records `name` = `value` for later steps
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let entry = format_output(name, value);

        match &self.path {
            Some(path) => {
                debug!("Appending output {} to {}", name, path.display());
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?;
                file.write_all(entry.as_bytes())
                    .with_context(|| format!("Failed to write output file {}", path.display()))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(entry.as_bytes())
                    .context("Failed to write output to stdout")?;
            }
        }

        Ok(())
    }
}

/// Formats one output entry
///
/// Multi-line values need the heredoc form with a delimiter that cannot
/// occur in the value.
fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}
