use serde::{Deserialize, Serialize};

/// Coverage percentage below which a soft test case warns, unless configured.
pub const DEFAULT_WARN_THRESHOLD: f64 = 70.0;

/// How a test case turns its outcome into a verdict.
///
/// Always declared by the test case; never inferred from the checks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ClassificationPolicy {
    /// Any failed check fails the test case.
    #[default]
    Hard,
    /// Partial coverage is advisory. Thresholds are percentages in `0..=100`.
    Soft {
        warn_threshold: f64,
        #[serde(default)]
        fail_threshold: f64,
    },
}

impl ClassificationPolicy {
    #[must_use]
    pub const fn soft(warn_threshold: f64) -> Self {
        Self::Soft {
            warn_threshold,
            fail_threshold: 0.0,
        }
    }

    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::Soft { .. })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft { .. } => "soft",
        }
    }

    /// Describe why the thresholds are unusable, if they are.
    #[must_use]
    pub fn misconfiguration(&self) -> Option<String> {
        let Self::Soft {
            warn_threshold,
            fail_threshold,
        } = *self
        else {
            return None;
        };

        if !is_valid_threshold(warn_threshold) {
            return Some(format!(
                "warn_threshold must be between 0 and 100, got {warn_threshold}"
            ));
        }
        if !is_valid_threshold(fail_threshold) {
            return Some(format!(
                "fail_threshold must be between 0 and 100, got {fail_threshold}"
            ));
        }
        if fail_threshold > warn_threshold {
            return Some(format!(
                "fail_threshold ({fail_threshold}) must not exceed warn_threshold ({warn_threshold})"
            ));
        }
        None
    }
}

/// A threshold is a finite percentage in `0..=100`.
#[must_use]
pub fn is_valid_threshold(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}
