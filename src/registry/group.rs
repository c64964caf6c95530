use indexmap::IndexMap;

use super::check::Check;

/// Ordered set of checks evaluated together, keyed by check name.
///
/// Order does not influence evaluation; it only keeps reports stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckGroup {
    checks: IndexMap<String, Check>,
}

impl CheckGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a category of literal checks from `(name, pattern)` pairs.
    #[must_use]
    pub fn define<N, P>(category: &str, entries: impl IntoIterator<Item = (N, P)>) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        Self::from_checks(
            category,
            entries
                .into_iter()
                .map(|(name, pattern)| Check::literal(name, pattern)),
        )
    }

    /// Build a category from fully specified checks; each check is tagged with `category`.
    #[must_use]
    pub fn from_checks(category: &str, checks: impl IntoIterator<Item = Check>) -> Self {
        let mut group = Self::new();
        for check in checks {
            group.insert(check.in_category(category));
        }
        group
    }

    /// Insert a check, replacing any check with the same name.
    ///
    /// A replaced check keeps its original position. Returns the replaced check.
    pub fn insert(&mut self, check: Check) -> Option<Check> {
        self.checks.insert(check.name.clone(), check)
    }

    /// Union of `groups` by check name.
    ///
    /// When two groups define the same name the later group's check wins. This is
    /// how a suite overrides a shared category for one test, so every replacement
    /// is logged at debug level instead of being dropped silently.
    #[must_use]
    pub fn merge<'a>(groups: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut merged = Self::new();
        for group in groups {
            for check in group.checks.values() {
                if let Some(previous) = merged.insert(check.clone()) {
                    tracing::debug!(
                        check = %check.name,
                        replaced_category = previous.category.as_deref().unwrap_or("-"),
                        category = check.category.as_deref().unwrap_or("-"),
                        "check redefined while merging groups; later definition wins"
                    );
                }
            }
        }
        merged
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Check> {
        self.checks.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    /// Distinct categories in first-seen order. Untagged checks are not listed.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.checks.values().filter_map(|c| c.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl FromIterator<Check> for CheckGroup {
    fn from_iter<I: IntoIterator<Item = Check>>(iter: I) -> Self {
        let mut group = Self::new();
        for check in iter {
            group.insert(check);
        }
        group
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
