//! Label sets
//!
//! The primary runner is identified by the labels it must carry, not by name.

use crate::error::ParseError;

/// Separator used for comma-joined label lists
pub const LABEL_SEPARATOR: char = ',';

/// Ordered, non-empty list of required runner labels
///
/// Matching only cares about membership; order is kept so the selected
/// labels are reported back exactly as they were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Builds a label set from individual labels
    pub fn new<I, S>(labels: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.into().trim().to_string())
            .collect();

        if labels.is_empty() {
            return Err(ParseError::EmptyLabels);
        }

        for (position, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(ParseError::EmptyLabel(position));
            }
            if label.contains(LABEL_SEPARATOR) {
                return Err(ParseError::SeparatorInLabel(label.clone()));
            }
        }

        Ok(Self(labels))
    }

    /// Parses a comma-separated label list such as `self-hosted,linux`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyLabels);
        }
        Self::new(input.split(LABEL_SEPARATOR))
    }

    /// Iterates over the labels in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form, e.g. `self-hosted,linux`
    pub fn to_csv(&self) -> String {
        self.0.join(",")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for LabelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_csv())
    }
}
