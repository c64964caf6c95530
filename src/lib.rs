pub mod artifact;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod registry;
pub mod report;
pub mod runner;

pub use error::{ArtifactError, EvidenceGuardError, PatternError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_TESTS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
