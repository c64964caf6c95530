use regex::{Regex, RegexBuilder};

use crate::error::PatternError;
use crate::registry::{Check, CheckGroup, MatchMode};

use super::outcome::EvaluationOutcome;

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Regex(Regex),
}

impl Matcher {
    fn compile(check: &Check) -> Result<Self, PatternError> {
        if check.pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        match check.mode {
            MatchMode::Literal => Ok(Self::Literal(check.pattern.clone())),
            MatchMode::Regex => {
                let regex = RegexBuilder::new(&check.pattern)
                    .case_insensitive(check.flags.case_insensitive)
                    .dot_matches_new_line(check.flags.dot_all)
                    .build()?;
                Ok(Self::Regex(regex))
            }
        }
    }

    fn is_match(&self, content: &str) -> bool {
        match self {
            Self::Literal(needle) => content.contains(needle.as_str()),
            Self::Regex(regex) => regex.is_match(content),
        }
    }
}

/// Compile `check`'s pattern without keeping it, reporting why it is unusable.
///
/// # Errors
/// Returns the [`PatternError`] the check would be failed with at run time.
pub fn validate_pattern(check: &Check) -> Result<(), PatternError> {
    Matcher::compile(check).map(|_| ())
}

/// A check whose pattern has been compiled (or failed to compile).
#[derive(Debug, Clone)]
pub struct CompiledCheck {
    name: String,
    matcher: Result<Matcher, PatternError>,
}

impl CompiledCheck {
    #[must_use]
    pub fn compile(check: &Check) -> Self {
        let matcher = Matcher::compile(check);
        if let Err(e) = &matcher {
            tracing::warn!(check = %check.name, pattern = %check.pattern, "check pattern unusable: {e}");
        }
        Self {
            name: check.name.clone(),
            matcher,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn error(&self) -> Option<&PatternError> {
        self.matcher.as_ref().err()
    }

    /// An uncompilable check never matches.
    #[must_use]
    pub fn is_match(&self, content: &str) -> bool {
        self.matcher.as_ref().is_ok_and(|m| m.is_match(content))
    }
}

/// All checks of a group, compiled once and reusable across artifacts.
#[derive(Debug, Clone, Default)]
pub struct CompiledGroup {
    checks: Vec<CompiledCheck>,
}

impl CompiledGroup {
    #[must_use]
    pub fn compile(group: &CheckGroup) -> Self {
        Self {
            checks: group.iter().map(CompiledCheck::compile).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledCheck> {
        self.checks.iter()
    }

    #[must_use]
    pub fn evaluate(&self, content: &str) -> EvaluationOutcome {
        self.evaluate_any(&[content])
    }

    #[must_use]
    pub fn evaluate_any<C: AsRef<str>>(&self, contents: &[C]) -> EvaluationOutcome {
        let mut outcome = EvaluationOutcome::default();
        for check in &self.checks {
            if let Some(error) = check.error() {
                outcome.record_error(&check.name, error);
            } else if contents.iter().any(|c| check.is_match(c.as_ref())) {
                outcome.record_pass(&check.name);
            } else {
                outcome.record_fail(&check.name);
            }
        }
        outcome
    }

    /// Every check failed, used when the artifact itself could not be read.
    #[must_use]
    pub fn all_failed(&self) -> EvaluationOutcome {
        let mut outcome = EvaluationOutcome::default();
        for check in &self.checks {
            outcome.record_fail(&check.name);
        }
        outcome
    }
}
