use serde::{Deserialize, Serialize};

use crate::checker::ClassificationPolicy;
use crate::error::{EvidenceGuardError, Result};
use crate::registry::CheckGroup;

/// How a test case's checks are matched across its artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactCombine {
    /// A check passes if any artifact satisfies it.
    #[default]
    Any,
    /// Every check is scored against every artifact separately.
    Each,
}

/// How an advisory metric's matches are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricReduce {
    /// `true` if at least one pattern matched.
    #[default]
    Any,
    /// `true` if every pattern matched.
    All,
    /// `"matched/total"`.
    Count,
}

/// A named pattern family reported in result details without affecting the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub checks: CheckGroup,
    pub reduce: MetricReduce,
}

/// One named test case: which artifacts to read, which checks to run, and how
/// to classify the outcome.
///
/// Only constructible through [`TestDefinitionBuilder`], which rejects
/// definitions that could never be evaluated meaningfully.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDefinition {
    name: String,
    artifacts: Vec<String>,
    optional_artifacts: Vec<String>,
    checks: CheckGroup,
    policy: ClassificationPolicy,
    combine: ArtifactCombine,
    metrics: Vec<Metric>,
    enabled: bool,
}

impl TestDefinition {
    #[must_use]
    pub fn builder(name: impl Into<String>, policy: ClassificationPolicy) -> TestDefinitionBuilder {
        TestDefinitionBuilder::new(name, policy)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All artifacts in declaration order, optional ones included.
    #[must_use]
    pub fn artifacts(&self) -> &[String] {
        &self.artifacts
    }

    #[must_use]
    pub fn is_optional(&self, artifact: &str) -> bool {
        self.optional_artifacts.iter().any(|a| a == artifact)
    }

    #[must_use]
    pub const fn checks(&self) -> &CheckGroup {
        &self.checks
    }

    #[must_use]
    pub const fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    #[must_use]
    pub const fn combine(&self) -> ArtifactCombine {
        self.combine
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Clone)]
pub struct TestDefinitionBuilder {
    definition: TestDefinition,
}

impl TestDefinitionBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>, policy: ClassificationPolicy) -> Self {
        Self {
            definition: TestDefinition {
                name: name.into(),
                artifacts: Vec::new(),
                optional_artifacts: Vec::new(),
                checks: CheckGroup::new(),
                policy,
                combine: ArtifactCombine::Any,
                metrics: Vec::new(),
                enabled: true,
            },
        }
    }

    #[must_use]
    pub fn artifact(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.definition.artifacts.contains(&id) {
            self.definition.artifacts.push(id);
        }
        self
    }

    /// An artifact whose absence does not by itself fail the test case.
    #[must_use]
    pub fn optional_artifact(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.definition.optional_artifacts.contains(&id) {
            self.definition.optional_artifacts.push(id.clone());
        }
        self.artifact(id)
    }

    /// Merge `group` into the test's checks; later groups win on name collisions.
    #[must_use]
    pub fn checks(mut self, group: &CheckGroup) -> Self {
        self.definition.checks = CheckGroup::merge([&self.definition.checks, group]);
        self
    }

    #[must_use]
    pub const fn combine(mut self, combine: ArtifactCombine) -> Self {
        self.definition.combine = combine;
        self
    }

    #[must_use]
    pub fn metric(mut self, name: impl Into<String>, reduce: MetricReduce, checks: CheckGroup) -> Self {
        self.definition.metrics.push(Metric {
            name: name.into(),
            checks,
            reduce,
        });
        self
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.definition.enabled = enabled;
        self
    }

    /// # Errors
    /// Returns `PolicyMisconfiguration` if the name is blank, no required
    /// artifact is declared, a threshold is out of range, a metric has no
    /// patterns, or `each` mode names contain the `::` separator.
    pub fn build(self) -> Result<TestDefinition> {
        let definition = self.definition;
        let fault = |reason: String| EvidenceGuardError::misconfigured(&definition.name, reason);

        if definition.name.trim().is_empty() {
            return Err(fault("test name must not be empty".to_string()));
        }
        if definition.artifacts.is_empty() {
            return Err(fault("at least one artifact is required".to_string()));
        }
        if definition
            .artifacts
            .iter()
            .all(|id| definition.optional_artifacts.contains(id))
        {
            return Err(fault(
                "at least one required artifact is needed; every artifact is optional".to_string(),
            ));
        }
        if definition.combine == ArtifactCombine::Each
            && let Some(reason) = each_mode_name_clash(&definition)
        {
            return Err(fault(reason));
        }
        if let Some(reason) = definition.policy.misconfiguration() {
            return Err(fault(reason));
        }
        if let Some(metric) = definition.metrics.iter().find(|m| m.checks.is_empty()) {
            return Err(fault(format!("metric '{}' has no patterns", metric.name)));
        }
        Ok(definition)
    }
}

/// Separator between artifact and check in `each` mode outcome names.
pub(crate) const EACH_SEPARATOR: &str = "::";

/// In `each` mode outcome names are `<artifact>::<check>`; a separator inside
/// either part would let two pairs share a name.
fn each_mode_name_clash(definition: &TestDefinition) -> Option<String> {
    if let Some(id) = definition
        .artifacts
        .iter()
        .find(|id| id.contains(EACH_SEPARATOR))
    {
        return Some(format!(
            "artifact '{id}' contains '{EACH_SEPARATOR}', which is not allowed with combine = each"
        ));
    }
    definition
        .checks
        .names()
        .find(|name| name.contains(EACH_SEPARATOR))
        .map(|name| {
            format!(
                "check '{name}' contains '{EACH_SEPARATOR}', which is not allowed with combine = each"
            )
        })
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
