//! Entry exclusion rules applied during traversal

use crate::error::Result;
use glob::Pattern;

/// Entry names that are always skipped
pub const DENIED_NAMES: [&str; 3] = ["node_modules", "__pycache__", "venv"];

/// Decides whether a directory entry is skipped
///
/// Hidden entries and [`DENIED_NAMES`] are always skipped. User patterns can
/// only widen the set; they are matched against the entry name.
#[derive(Debug, Clone, Default)]
pub struct IgnorePolicy {
    patterns: Vec<Pattern>,
}

impl IgnorePolicy {
    /// Policy with the built-in rules only
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy with the built-in rules plus compiled glob `patterns`
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn should_skip(&self, name: &str) -> bool {
        name.starts_with('.')
            || DENIED_NAMES.contains(&name)
            || self.patterns.iter().any(|pattern| pattern.matches(name))
    }
}
