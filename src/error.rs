use thiserror::Error;

use crate::types::Severity;

/// Failures that stop the check before any thresholds are evaluated.
///
/// Each variant renders as the one-line diagnostic printed for it.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("ERROR: {0}")]
    Config(String),

    #[error("Error creating HTTP request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("Error fetching URL: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Error decoding status JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProbeError {
    pub fn severity(&self) -> Severity {
        Severity::Critical
    }

    pub fn exit_code(&self) -> u8 {
        self.severity().exit_code()
    }
}
