use crate::checker::ClassificationPolicy;
use crate::error::Result;
use crate::registry::{Check, CheckGroup, RegexFlags};
use crate::runner::TestDefinition;

use super::model::{CheckSpec, MetricConfig, PolicyKind, SuiteConfig, TestConfig};
use super::validation::validate_suite_semantics;

impl CheckSpec {
    /// The check this spec describes, named `name`.
    #[must_use]
    pub fn to_check(&self, name: &str) -> Check {
        match self {
            Self::Literal(pattern) => Check::literal(name, pattern.as_str()),
            Self::Detailed(detail) => Check {
                name: name.to_string(),
                pattern: detail.pattern.clone(),
                mode: detail.mode,
                flags: detail.flags.iter().copied().collect(),
                category: None,
            },
        }
    }
}

impl MetricConfig {
    /// One check per pattern, named by the pattern text.
    #[must_use]
    pub fn to_checks(&self) -> Vec<Check> {
        let flags: RegexFlags = self.flags.iter().copied().collect();
        self.patterns
            .iter()
            .map(|pattern| Check {
                name: pattern.clone(),
                pattern: pattern.clone(),
                mode: self.mode,
                flags,
                category: None,
            })
            .collect()
    }
}

impl SuiteConfig {
    /// Shared check categories, keyed by group name.
    #[must_use]
    pub fn check_group(&self, name: &str) -> Option<CheckGroup> {
        self.groups.get(name).map(|checks| {
            CheckGroup::from_checks(
                name,
                checks.iter().map(|(check, spec)| spec.to_check(check)),
            )
        })
    }

    /// Build runnable test definitions in declaration order.
    ///
    /// # Errors
    /// Returns an error if the suite fails semantic validation or any test
    /// definition is misconfigured.
    pub fn definitions(&self) -> Result<Vec<TestDefinition>> {
        validate_suite_semantics(self)?;
        self.tests.iter().map(|test| self.definition(test)).collect()
    }

    fn policy(&self, test: &TestConfig) -> ClassificationPolicy {
        match test.policy {
            PolicyKind::Hard => ClassificationPolicy::Hard,
            PolicyKind::Soft => ClassificationPolicy::Soft {
                warn_threshold: test.warn_threshold.unwrap_or(self.run.warn_threshold),
                fail_threshold: test.fail_threshold.unwrap_or(0.0),
            },
        }
    }

    fn definition(&self, test: &TestConfig) -> Result<TestDefinition> {
        let mut builder = TestDefinition::builder(&test.name, self.policy(test))
            .combine(test.combine)
            .enabled(test.enabled);

        for artifact in &test.artifacts {
            builder = if test.optional_artifacts.contains(artifact) {
                builder.optional_artifact(artifact)
            } else {
                builder.artifact(artifact)
            };
        }

        for group in test.groups.iter().filter_map(|name| self.check_group(name)) {
            builder = builder.checks(&group);
        }
        let inline: CheckGroup = test
            .checks
            .iter()
            .map(|(name, spec)| spec.to_check(name))
            .collect();
        builder = builder.checks(&inline);

        for metric in &test.metrics {
            let checks = metric.to_checks().into_iter().collect();
            builder = builder.metric(&metric.name, metric.reduce, checks);
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
