use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::artifact::ArtifactSource;
use crate::error::Result;

use super::case;
use super::definition::TestDefinition;
use super::log::ResultLog;
use super::result::TestResult;

/// Stops scheduling of new test cases. Cases already running complete.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

type Observer<'a> = Box<dyn Fn(&TestResult) + Send + Sync + 'a>;

/// Runs many independent test cases, optionally in parallel.
///
/// Results are appended to the caller's [`ResultLog`] in definition order,
/// whatever order the workers finish in.
pub struct SuiteRunner<'a> {
    source: &'a dyn ArtifactSource,
    jobs: usize,
    fail_fast: bool,
    selection: Option<Vec<String>>,
    cancel: CancellationToken,
    observer: Option<Observer<'a>>,
}

impl<'a> SuiteRunner<'a> {
    #[must_use]
    pub fn new(source: &'a dyn ArtifactSource) -> Self {
        Self {
            source,
            jobs: 1,
            fail_fast: false,
            selection: None,
            cancel: CancellationToken::new(),
            observer: None,
        }
    }

    /// Worker count; `0` uses one worker per CPU.
    #[must_use]
    pub const fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Cancel the rest of the run after the first FAIL.
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Only run the named test cases; the others are recorded as skipped.
    #[must_use]
    pub fn with_selection(mut self, names: Vec<String>) -> Self {
        self.selection = (!names.is_empty()).then_some(names);
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Called once per result as soon as it is produced, from worker threads.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&TestResult) + Send + Sync + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Run every definition and append one result per definition to `log`.
    ///
    /// # Errors
    /// Returns an error only if the worker pool cannot be created.
    pub fn run(&self, definitions: &[TestDefinition], log: &mut ResultLog) -> Result<()> {
        if self.jobs == 1 {
            log.extend(definitions.iter().map(|d| self.run_one(d)));
            return Ok(());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;
        let results: Vec<_> =
            pool.install(|| definitions.par_iter().map(|d| self.run_one(d)).collect());
        log.extend(results);
        Ok(())
    }

    fn run_one(&self, definition: &TestDefinition) -> TestResult {
        let result = self.schedule(definition);
        if self.fail_fast && result.is_failed() && !self.cancel.is_cancelled() {
            tracing::info!(test = result.test_name(), "fail-fast: cancelling remaining test cases");
            self.cancel.cancel();
        }
        if let Some(observer) = &self.observer {
            observer(&result);
        }
        result
    }

    fn schedule(&self, definition: &TestDefinition) -> TestResult {
        if let Some(selection) = &self.selection
            && !selection.iter().any(|name| name == definition.name())
        {
            return TestResult::skipped(definition.name(), "Not selected for this run");
        }
        if self.cancel.is_cancelled() {
            return TestResult::skipped(definition.name(), "Run cancelled before this test started");
        }
        case::run(definition, self.source)
    }
}

/// Run `definitions` sequentially against `source` and return the result log.
#[must_use]
pub fn run_suite(definitions: &[TestDefinition], source: &dyn ArtifactSource) -> ResultLog {
    let mut log = ResultLog::new();
    log.extend(definitions.iter().map(|d| case::run(d, source)));
    log
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
