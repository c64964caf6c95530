use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::PatternError;

/// Which checks of a group passed and which failed.
///
/// Every check of the evaluated group lands in exactly one of `passed` or
/// `failed`. Checks whose pattern could not be compiled are failed and also
/// listed in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationOutcome {
    passed: IndexSet<String>,
    failed: IndexSet<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    errors: IndexMap<String, String>,
}

impl EvaluationOutcome {
    pub(crate) fn record_pass(&mut self, name: &str) {
        self.failed.shift_remove(name);
        self.passed.insert(name.to_string());
    }

    pub(crate) fn record_fail(&mut self, name: &str) {
        self.passed.shift_remove(name);
        self.failed.insert(name.to_string());
    }

    pub(crate) fn record_error(&mut self, name: &str, error: &PatternError) {
        self.record_fail(name);
        self.errors.insert(name.to_string(), error.to_string());
    }

    /// Fold `other` into `self`, prefixing its check names with `"{prefix}::"`.
    pub(crate) fn absorb_prefixed(&mut self, prefix: &str, other: Self) {
        for name in other.passed {
            self.record_pass(&format!("{prefix}::{name}"));
        }
        for name in other.failed {
            self.record_fail(&format!("{prefix}::{name}"));
        }
        for (name, error) in other.errors {
            self.errors.insert(format!("{prefix}::{name}"), error);
        }
    }

    #[must_use]
    pub const fn passed(&self) -> &IndexSet<String> {
        &self.passed
    }

    #[must_use]
    pub const fn failed(&self) -> &IndexSet<String> {
        &self.failed
    }

    #[must_use]
    pub const fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn is_passed(&self, name: &str) -> bool {
        self.passed.contains(name)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Percentage of checks that passed; an empty outcome counts as fully covered.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Check counts are far below f64 precision limits
    pub fn coverage(&self) -> f64 {
        if self.is_empty() {
            return 100.0;
        }
        self.passed.len() as f64 * 100.0 / self.total() as f64
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
