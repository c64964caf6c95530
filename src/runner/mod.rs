//! Runs test definitions against artifacts and records one result per test case.

mod case;
mod definition;
mod log;
mod result;
mod suite;

pub use case::run;
pub use definition::{ArtifactCombine, Metric, MetricReduce, TestDefinition, TestDefinitionBuilder};
pub use log::ResultLog;
pub use result::TestResult;
pub use suite::{CancellationToken, SuiteRunner, run_suite};
