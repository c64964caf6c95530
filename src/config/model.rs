use std::path::PathBuf;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_WARN_THRESHOLD;
use crate::registry::{MatchMode, RegexFlag};
use crate::runner::{ArtifactCombine, MetricReduce};

/// Supported suite file version.
pub const SUITE_VERSION: &str = "1";

/// A suite file: shared check groups plus the test cases that use them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Suite schema version. Missing means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub run: RunConfig,

    /// Named check categories `[groups.<name>]`, each mapping check name to pattern.
    #[serde(default)]
    pub groups: IndexMap<String, IndexMap<String, CheckSpec>>,

    /// Test cases `[[tests]]`, run in declaration order.
    #[serde(default)]
    pub tests: Vec<TestConfig>,
}

/// Run-wide settings `[run]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Base directory for artifact identifiers, relative to the suite file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Per-artifact loading timeout in milliseconds (0 disables).
    #[serde(default = "default_artifact_timeout_ms")]
    pub artifact_timeout_ms: u64,

    /// Default warning threshold (percent) for soft tests.
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold: f64,

    /// Worker threads (0 = one per CPU).
    #[serde(default)]
    pub jobs: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: None,
            artifact_timeout_ms: default_artifact_timeout_ms(),
            warn_threshold: default_warn_threshold(),
            jobs: 0,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub const fn artifact_timeout(&self) -> Duration {
        Duration::from_millis(self.artifact_timeout_ms)
    }
}

/// A check pattern: a bare string is a literal, a table may choose regex mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CheckSpec {
    Literal(String),
    Detailed(CheckSpecDetail),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckSpecDetail {
    pub pattern: String,

    #[serde(default)]
    pub mode: MatchMode,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<RegexFlag>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Hard,
    Soft,
}

/// One test case `[[tests]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestConfig {
    pub name: String,

    pub artifacts: Vec<String>,

    /// Subset of `artifacts` whose absence is tolerated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_artifacts: Vec<String>,

    /// Names of `[groups.*]` to merge, in order; later groups win on collisions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Inline checks, merged after `groups`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub checks: IndexMap<String, CheckSpec>,

    /// Required: whether any failed check fails the test (`hard`) or coverage is advisory (`soft`).
    pub policy: PolicyKind,

    /// Soft only. Defaults to `run.warn_threshold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_threshold: Option<f64>,

    /// Soft only. Coverage below this fails the test. Defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_threshold: Option<f64>,

    #[serde(default)]
    pub combine: ArtifactCombine,

    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Advisory pattern families `[[tests.metrics]]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<MetricConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    pub name: String,

    #[serde(default)]
    pub reduce: MetricReduce,

    #[serde(default)]
    pub mode: MatchMode,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<RegexFlag>,

    pub patterns: Vec<String>,
}

const fn default_true() -> bool {
    true
}

const fn default_artifact_timeout_ms() -> u64 {
    5000
}

const fn default_warn_threshold() -> f64 {
    DEFAULT_WARN_THRESHOLD
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
