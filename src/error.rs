use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvidenceGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A test definition that can never be evaluated meaningfully.
    #[error("Invalid test definition '{test}': {reason}")]
    PolicyMisconfiguration { test: String, reason: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl EvidenceGuardError {
    pub fn misconfigured(test: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PolicyMisconfiguration {
            test: test.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to obtain an artifact's content.
///
/// Recovered by the test case runner: the owning test case becomes a FAIL
/// result naming the artifact, other test cases are unaffected.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("artifact not found: {id}")]
    NotFound { id: String },

    #[error("artifact not readable: {id}")]
    Unreadable {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out after {}ms loading artifact: {id}", timeout.as_millis())]
    Timeout { id: String, timeout: Duration },
}

impl ArtifactError {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::NotFound { id } | Self::Unreadable { id, .. } | Self::Timeout { id, .. } => id,
        }
    }
}

/// A check pattern that cannot be matched in its declared mode.
///
/// Isolated per check: only the offending check is reported as failed.
#[derive(Error, Debug, Clone)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, EvidenceGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
