//! Parse errors for configuration-derived domain values

use thiserror::Error;

/// Errors raised while parsing labels, repositories and scopes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The label list contained no labels
    #[error("label list is empty")]
    EmptyLabels,

    /// A label was blank after trimming
    #[error("label at position {0} is empty")]
    EmptyLabel(usize),

    /// A label contained the list separator
    #[error("label '{0}' must not contain ','")]
    SeparatorInLabel(String),

    /// Repository was not in `owner/repo` form
    #[error("invalid repository '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// Unknown runner scope
    #[error("invalid runner scope '{0}', expected 'repo' or 'org'")]
    InvalidScope(String),
}
