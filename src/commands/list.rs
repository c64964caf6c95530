use std::fmt::Write;

use crate::checker::ClassificationPolicy;
use crate::cli::SuiteArgs;
use crate::runner::TestDefinition;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_suite;

#[must_use]
pub fn run_list(args: &SuiteArgs) -> i32 {
    match run_list_impl(args) {
        Ok(listing) => {
            print!("{listing}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_list_impl(args: &SuiteArgs) -> Result<String> {
    let loaded = load_suite(args.suite.as_deref())?;
    let definitions = loaded.config.definitions()?;
    Ok(format_suite_listing(&definitions))
}

fn describe_policy(policy: ClassificationPolicy) -> String {
    match policy {
        ClassificationPolicy::Hard => "hard".to_string(),
        ClassificationPolicy::Soft {
            warn_threshold,
            fail_threshold,
        } if fail_threshold > 0.0 => {
            format!("soft, warn < {warn_threshold}%, fail < {fail_threshold}%")
        }
        ClassificationPolicy::Soft { warn_threshold, .. } => {
            format!("soft, warn < {warn_threshold}%")
        }
    }
}

/// One block per test: policy, artifacts and the merged check names.
#[must_use]
pub fn format_suite_listing(definitions: &[TestDefinition]) -> String {
    let mut out = String::new();
    for definition in definitions {
        let disabled = if definition.is_enabled() { "" } else { " (disabled)" };
        let _ = writeln!(
            out,
            "{} [{}]{disabled}",
            definition.name(),
            describe_policy(definition.policy())
        );

        let artifacts: Vec<String> = definition
            .artifacts()
            .iter()
            .map(|id| {
                if definition.is_optional(id) {
                    format!("{id} (optional)")
                } else {
                    id.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "  artifacts: {}", artifacts.join(", "));

        let checks: Vec<&str> = definition.checks().names().collect();
        let _ = writeln!(out, "  checks ({}): {}", checks.len(), checks.join(", "));

        if !definition.metrics().is_empty() {
            let metrics: Vec<&str> = definition.metrics().iter().map(|m| m.name.as_str()).collect();
            let _ = writeln!(out, "  metrics: {}", metrics.join(", "));
        }
    }
    out
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
