use crate::report::{Summary, overall_success, summarize};

use super::result::TestResult;

/// Append-only collection of test results, in scheduling order.
///
/// Owned by whoever drives the run and passed explicitly to each runner call.
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    results: Vec<TestResult>,
}

impl ResultLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TestResult] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        summarize(&self.results)
    }

    #[must_use]
    pub fn overall_success(&self) -> bool {
        overall_success(&self.results)
    }

    #[must_use]
    pub fn into_results(self) -> Vec<TestResult> {
        self.results
    }
}

impl Extend<TestResult> for ResultLog {
    fn extend<I: IntoIterator<Item = TestResult>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}
