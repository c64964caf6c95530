//! Suite semantic validation.
//!
//! Checks what the TOML schema cannot express: unique test names, resolvable
//! group references and usable thresholds. Malformed patterns are not errors;
//! they fail only their own check at run time and are surfaced as warnings.

use std::collections::HashSet;

use crate::checker::is_valid_threshold;
use crate::config::{PolicyKind, SuiteConfig, TestConfig};
use crate::error::{EvidenceGuardError, Result};
use crate::evaluator::validate_pattern;

/// Validates semantic correctness of a suite.
///
/// # Errors
/// Returns `Config` for suite-wide problems and `PolicyMisconfiguration` for a
/// test case that could never be evaluated meaningfully.
pub fn validate_suite_semantics(config: &SuiteConfig) -> Result<()> {
    validate_run_section(config)?;

    let mut seen = HashSet::new();
    for test in &config.tests {
        if !seen.insert(test.name.as_str()) {
            return Err(EvidenceGuardError::Config(format!(
                "duplicate test name '{}'",
                test.name
            )));
        }
        validate_test(config, test)?;
    }
    Ok(())
}

fn validate_run_section(config: &SuiteConfig) -> Result<()> {
    if !is_valid_threshold(config.run.warn_threshold) {
        return Err(EvidenceGuardError::Config(format!(
            "run.warn_threshold must be between 0 and 100, got {}",
            config.run.warn_threshold
        )));
    }
    Ok(())
}

fn validate_test(config: &SuiteConfig, test: &TestConfig) -> Result<()> {
    let fault = |reason: String| EvidenceGuardError::misconfigured(&test.name, reason);

    if test.name.trim().is_empty() {
        return Err(fault("test name must not be empty".to_string()));
    }
    if let Some(group) = test.groups.iter().find(|g| !config.groups.contains_key(*g)) {
        return Err(fault(format!("unknown group '{group}'")));
    }
    if let Some(optional) = test
        .optional_artifacts
        .iter()
        .find(|a| !test.artifacts.contains(a))
    {
        return Err(fault(format!(
            "optional artifact '{optional}' is not listed in artifacts"
        )));
    }
    if test.policy == PolicyKind::Hard
        && let Some(field) = [
            ("warn_threshold", test.warn_threshold),
            ("fail_threshold", test.fail_threshold),
        ]
        .into_iter()
        .find_map(|(field, value)| value.map(|_| field))
    {
        return Err(fault(format!("{field} only applies to policy = \"soft\"")));
    }
    for metric in &test.metrics {
        if metric.patterns.is_empty() {
            return Err(fault(format!("metric '{}' has no patterns", metric.name)));
        }
        let mut seen = HashSet::new();
        if let Some(pattern) = metric.patterns.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(fault(format!(
                "metric '{}' lists pattern '{pattern}' more than once",
                metric.name
            )));
        }
    }
    Ok(())
}

/// Describe every pattern in the suite that will fail its check at run time.
#[must_use]
pub fn pattern_warnings(config: &SuiteConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    for (group, checks) in &config.groups {
        for (name, spec) in checks {
            if let Err(e) = validate_pattern(&spec.to_check(name)) {
                warnings.push(format!("group '{group}', check '{name}': {e}"));
            }
        }
    }

    for test in &config.tests {
        for (name, spec) in &test.checks {
            if let Err(e) = validate_pattern(&spec.to_check(name)) {
                warnings.push(format!("test '{}', check '{name}': {e}", test.name));
            }
        }
        for metric in &test.metrics {
            for check in metric.to_checks() {
                if let Err(e) = validate_pattern(&check) {
                    warnings.push(format!(
                        "test '{}', metric '{}', pattern '{}': {e}",
                        test.name, metric.name, check.pattern
                    ));
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
