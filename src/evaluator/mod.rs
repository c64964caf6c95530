//! Decides which checks of a group are satisfied by artifact content.
//!
//! Evaluation is a pure function of its inputs. Patterns are compiled once per
//! group; a pattern that fails to compile only fails its own check.

mod compiled;
mod outcome;

pub use compiled::{CompiledCheck, CompiledGroup, validate_pattern};
pub use outcome::EvaluationOutcome;

use crate::registry::CheckGroup;

/// Evaluate `group` against a single artifact's content.
#[must_use]
pub fn evaluate(content: &str, group: &CheckGroup) -> EvaluationOutcome {
    CompiledGroup::compile(group).evaluate(content)
}

/// Evaluate `group` against several contents; a check passes if any content satisfies it.
#[must_use]
pub fn evaluate_any<C: AsRef<str>>(contents: &[C], group: &CheckGroup) -> EvaluationOutcome {
    CompiledGroup::compile(group).evaluate_any(contents)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
