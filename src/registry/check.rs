use serde::{Deserialize, Serialize};

/// How a check's pattern is matched against artifact content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Exact, case-sensitive substring containment.
    #[default]
    Literal,
    /// Regular expression search anywhere in the content.
    Regex,
}

/// A single regex flag as written in suite files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexFlag {
    CaseInsensitive,
    DotAll,
}

/// Regex flags for a check. Both off means default regex semantics:
/// case-sensitive, and `.` stops at line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegexFlags {
    pub case_insensitive: bool,
    pub dot_all: bool,
}

impl RegexFlags {
    pub const NONE: Self = Self {
        case_insensitive: false,
        dot_all: false,
    };

    #[must_use]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    #[must_use]
    pub const fn dot_all(mut self) -> Self {
        self.dot_all = true;
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.case_insensitive && !self.dot_all
    }
}

impl FromIterator<RegexFlag> for RegexFlags {
    fn from_iter<I: IntoIterator<Item = RegexFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |flags, flag| match flag {
            RegexFlag::CaseInsensitive => flags.case_insensitive(),
            RegexFlag::DotAll => flags.dot_all(),
        })
    }
}

/// A named pattern-match rule.
///
/// `category` records the group the check was defined in, so merged groups can
/// still report sub-scores per pattern family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub pattern: String,
    pub mode: MatchMode,
    #[serde(default, skip_serializing_if = "RegexFlags::is_empty")]
    pub flags: RegexFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Check {
    #[must_use]
    pub fn literal(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            mode: MatchMode::Literal,
            flags: RegexFlags::NONE,
            category: None,
        }
    }

    #[must_use]
    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            mode: MatchMode::Regex,
            ..Self::literal(name, pattern)
        }
    }

    /// Flags only affect regex checks; literal checks ignore them.
    #[must_use]
    pub const fn with_flags(mut self, flags: RegexFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
