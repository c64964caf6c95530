use serde::Serialize;

use crate::error::Result;
use crate::report::{Summary, overall_success, summarize};
use crate::runner::TestResult;

use super::OutputFormatter;

/// Machine-readable report: summary counts, overall success and every result.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    success: bool,
    results: &'a [TestResult],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[TestResult]) -> Result<String> {
        let output = JsonOutput {
            summary: summarize(results),
            success: overall_success(results),
            results,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
