use std::fmt::Write;

use serde_json::Value;

use crate::checker::Verdict;
use crate::error::Result;
use crate::report::summarize;
use crate::runner::TestResult;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: one status line per test case in run order, then a
/// summary block. Result details are shown with `-v`.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: Verdict) -> &'static str {
        match status {
            Verdict::Pass => "✅",
            Verdict::Fail => "❌",
            Verdict::Warning => "⚠️",
            Verdict::Skip => "⏭️",
        }
    }

    const fn status_color(status: Verdict) -> &'static str {
        match status {
            Verdict::Pass => ansi::GREEN,
            Verdict::Fail => ansi::RED,
            Verdict::Warning => ansi::YELLOW,
            Verdict::Skip => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &TestResult, output: &mut String) {
        let status = result.status();
        let label = self.colorize(status.as_str(), Self::status_color(status));
        let _ = writeln!(
            output,
            "{} {label}: {}",
            Self::status_icon(status),
            result.test_name()
        );
        let _ = writeln!(output, "   {}", result.message());

        if self.verbose >= 1 {
            for (key, value) in result.details() {
                let _ = writeln!(output, "   {key}: {}", render_value(value));
            }
        }
    }

    fn format_summary(&self, results: &[TestResult], output: &mut String) {
        let summary = summarize(results);
        let rule = "=".repeat(60);

        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "{}", self.colorize("TEST SUMMARY", ansi::BOLD));
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(
            output,
            "Summary: {} tests, {} passed, {} warnings, {} failed, {} skipped",
            summary.total,
            self.colorize(&summary.pass.to_string(), ansi::GREEN),
            self.colorize(&summary.warning.to_string(), ansi::YELLOW),
            self.colorize(&summary.fail.to_string(), ansi::RED),
            self.colorize(&summary.skip.to_string(), ansi::CYAN),
        );

        self.format_listing(results, Verdict::Fail, "Failed tests:", output);
        self.format_listing(results, Verdict::Warning, "Warnings:", output);

        let verdict = if summary.is_success() {
            self.colorize("PASSED", ansi::GREEN)
        } else {
            self.colorize("FAILED", ansi::RED)
        };
        let _ = writeln!(output, "Overall: {verdict}");
    }

    fn format_listing(
        &self,
        results: &[TestResult],
        status: Verdict,
        heading: &str,
        output: &mut String,
    ) {
        let mut matching = results.iter().filter(|r| r.status() == status).peekable();
        if matching.peek().is_none() {
            return;
        }
        let _ = writeln!(output, "{}", self.colorize(heading, Self::status_color(status)));
        for result in matching {
            let _ = writeln!(output, "  - {}: {}", result.test_name(), result.message());
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[TestResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            self.format_result(result, &mut output);
            output.push('\n');
        }
        self.format_summary(results, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
