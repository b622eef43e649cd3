//! Outcome reporting
//!
//! Every runtime failure still yields a usable runner: the fallback,
//! exactly as configured.

use runner_select_client::{ClientError, Result};
use runner_select_core::Selection;
use tracing::{info, warn};

/// Value for the `use-runner` output
///
/// A selection is reported as its JSON array form; an error is reported
/// as the fallback verbatim.
pub fn output_value(outcome: &Result<Selection>, fallback: &str) -> String {
    match outcome {
        Ok(selection) => {
            let value = selection.use_runner_json();
            info!("Primary runner is online: {}", selection.primary_is_online);
            info!("Using runner: {}", value);
            value
        }
        Err(e) => {
            log_failure(e);
            info!("Using fallback runner: {}", fallback);
            fallback.to_string()
        }
    }
}

fn log_failure(e: &ClientError) {
    match e {
        ClientError::ApiError { .. } => info!("{}", e),
        _ => warn!("Runner lookup failed: {}", e),
    }

    if e.is_not_found() {
        info!("A 404 here usually means the token cannot read runners for this repository");
    }
}
