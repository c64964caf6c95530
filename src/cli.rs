use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "evidence-guard")]
#[command(author, version, about = "Audit source artifacts for required implementation patterns")]
#[command(long_about = "Runs a suite of test cases, each checking that a set of source \
    artifacts contains required code patterns, and reports PASS/FAIL/WARNING/SKIP per test.\n\n\
    Exit codes:\n  \
    0 - No test case failed\n  \
    1 - At least one test case failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Emit log lines as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the suite and report a verdict per test case
    Check(CheckArgs),

    /// Load and validate a suite file without running it
    Validate(SuiteArgs),

    /// List test cases with their policy, artifacts and checks
    List(SuiteArgs),
}

#[derive(Args, Debug, Default)]
pub struct SuiteArgs {
    /// Path to suite file (default: discover .evidence-guard.toml)
    #[arg(short, long)]
    pub suite: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to suite file (default: discover .evidence-guard.toml)
    #[arg(short, long)]
    pub suite: Option<PathBuf>,

    /// Base directory for artifact identifiers (overrides `[run].root`)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only run the named test case (repeatable); others are skipped
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Worker threads, 0 for one per CPU (overrides `[run].jobs`)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Stop scheduling test cases after the first failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Per-artifact load timeout in milliseconds, 0 disables (overrides `[run].artifact_timeout_ms`)
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
