mod json;
mod logging;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use logging::{init_tracing, level_for_verbosity};
pub use progress::RunProgress;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::runner::TestResult;

/// Trait for formatting test results into various output formats.
pub trait OutputFormatter {
    /// Format the results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[TestResult]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
