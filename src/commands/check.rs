use std::time::Duration;

use crate::artifact::FsArtifactSource;
use crate::cli::{CheckArgs, Cli};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, RunProgress, TextFormatter,
};
use crate::runner::{ResultLog, SuiteRunner, TestDefinition, TestResult};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TESTS_FAILED, EvidenceGuardError, Result};

use super::{color_choice_to_mode, load_suite, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load the suite, run it and write the report.
///
/// # Errors
/// Returns an error if the suite cannot be loaded or is misconfigured, `--only`
/// names an unknown test, or the report cannot be written. Failing test cases
/// are not errors; they set the exit code.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load and validate the suite
    let loaded = load_suite(args.suite.as_deref())?;
    let definitions = loaded.config.definitions()?;
    validate_selection(&args.only, &definitions)?;

    // 2. Resolve run settings, CLI flags first
    let root = args.root.clone().unwrap_or_else(|| loaded.artifact_root());
    let timeout = args
        .timeout_ms
        .map_or_else(|| loaded.config.run.artifact_timeout(), Duration::from_millis);
    let jobs = args.jobs.unwrap_or(loaded.config.run.jobs);
    tracing::info!(
        suite = %loaded.path.display(),
        root = %root.display(),
        tests = definitions.len(),
        jobs,
        "running suite"
    );

    // 3. Run
    let source = FsArtifactSource::new(root).with_timeout(timeout);
    let progress = RunProgress::new(
        u64::try_from(definitions.len()).unwrap_or(u64::MAX),
        cli.quiet,
    );
    let observed = progress.clone();
    let runner = SuiteRunner::new(&source)
        .with_jobs(jobs)
        .with_fail_fast(args.fail_fast)
        .with_selection(args.only.clone())
        .with_observer(move |_: &TestResult| observed.inc());

    let mut log = ResultLog::new();
    runner.run(&definitions, &mut log)?;
    progress.finish();

    // 4. Report
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, log.as_slice(), color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if log.overall_success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_TESTS_FAILED)
    }
}

/// Every `--only` name must match a test in the suite.
pub(crate) fn validate_selection(only: &[String], definitions: &[TestDefinition]) -> Result<()> {
    let unknown: Vec<&str> = only
        .iter()
        .filter(|name| !definitions.iter().any(|d| d.name() == name.as_str()))
        .map(String::as_str)
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    Err(EvidenceGuardError::Config(format!(
        "Unknown test name(s) for --only: {}",
        unknown.join(", ")
    )))
}

pub(crate) fn format_output(
    format: OutputFormat,
    results: &[TestResult],
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
