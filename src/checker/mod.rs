mod policy;
mod verdict;

pub use policy::{ClassificationPolicy, DEFAULT_WARN_THRESHOLD, is_valid_threshold};
pub use verdict::Verdict;

use crate::evaluator::EvaluationOutcome;

/// Classify an evaluation outcome under the policy its test case declared.
///
/// Precedence:
/// 1. An empty group passes (coverage defaults to 100%).
/// 2. Hard policy: any failed check is a FAIL.
/// 3. Soft policy: coverage below `fail_threshold` is a FAIL, below
///    `warn_threshold` a WARNING, otherwise PASS.
#[must_use]
pub fn classify(outcome: &EvaluationOutcome, policy: ClassificationPolicy) -> Verdict {
    if outcome.is_empty() {
        return Verdict::Pass;
    }

    match policy {
        ClassificationPolicy::Hard => {
            if outcome.failed().is_empty() {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
        ClassificationPolicy::Soft {
            warn_threshold,
            fail_threshold,
        } => {
            let coverage = outcome.coverage();
            if coverage < fail_threshold {
                Verdict::Fail
            } else if coverage < warn_threshold {
                Verdict::Warning
            } else {
                Verdict::Pass
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
