use crate::cli::SuiteArgs;
use crate::config::{LoadedSuite, pattern_warnings};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_suite;

#[must_use]
pub fn run_validate(args: &SuiteArgs, quiet: bool) -> i32 {
    match run_validate_impl(args) {
        Ok((loaded, warnings)) => {
            for warning in &warnings {
                eprintln!("Warning: {warning}");
            }
            if !quiet {
                println!(
                    "Suite is valid: {} ({} tests)",
                    loaded.path.display(),
                    loaded.config.tests.len()
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load the suite and build every test definition without running anything.
///
/// Returns the suite and a description of every pattern that will fail its
/// check at run time.
///
/// # Errors
/// Returns an error if the suite cannot be loaded or any test is misconfigured.
pub fn run_validate_impl(args: &SuiteArgs) -> Result<(LoadedSuite, Vec<String>)> {
    let loaded = load_suite(args.suite.as_deref())?;
    loaded.config.definitions()?;
    let warnings = pattern_warnings(&loaded.config);
    Ok((loaded, warnings))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
