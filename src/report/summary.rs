use serde::Serialize;

use crate::checker::Verdict;
use crate::runner::TestResult;

/// Result counts by status, derived on demand from a result log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub pass: usize,
    pub fail: usize,
    pub warning: usize,
    pub skip: usize,
    pub total: usize,
}

impl Summary {
    /// Warnings and skips never affect overall success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.fail == 0
    }
}

#[must_use]
pub fn summarize(results: &[TestResult]) -> Summary {
    results.iter().fold(Summary::default(), |mut summary, result| {
        match result.status() {
            Verdict::Pass => summary.pass += 1,
            Verdict::Fail => summary.fail += 1,
            Verdict::Warning => summary.warning += 1,
            Verdict::Skip => summary.skip += 1,
        }
        summary.total += 1;
        summary
    })
}

/// `true` unless at least one result failed.
#[must_use]
pub fn overall_success(results: &[TestResult]) -> bool {
    !results.iter().any(TestResult::is_failed)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
