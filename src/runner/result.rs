use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::checker::Verdict;

/// The record of one test case execution. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    #[serde(rename = "test")]
    test_name: String,
    status: Verdict,
    message: String,
    timestamp: DateTime<Utc>,
    details: Map<String, Value>,
}

impl TestResult {
    #[must_use]
    pub fn new(
        test_name: impl Into<String>,
        status: Verdict,
        message: impl Into<String>,
        details: Map<String, Value>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            status,
            message: message.into(),
            timestamp: Utc::now(),
            details,
        }
    }

    #[must_use]
    pub fn skipped(test_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(test_name, Verdict::Skip, reason, Map::new())
    }

    #[must_use]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    #[must_use]
    pub const fn status(&self) -> Verdict {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub const fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, Verdict::Fail)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.status, Verdict::Warning)
    }
}
