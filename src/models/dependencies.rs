//! Run-wide set of referenced root-level modules

use std::collections::BTreeSet;

/// Number of dependencies shown in the report view
pub const TOP_DEPENDENCIES: usize = 10;

/// Deduplicated root identifiers seen by one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    roots: BTreeSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one root identifier; empty identifiers are ignored
    pub fn insert(&mut self, root: impl Into<String>) {
        let root = root.into();
        if !root.is_empty() {
            self.roots.insert(root);
        }
    }

    /// Fold several root identifiers into the set
    pub fn extend<I, S>(&mut self, roots: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for root in roots {
            self.insert(root);
        }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains(&self, root: &str) -> bool {
        self.roots.contains(root)
    }

    /// First `n` identifiers in ascending lexicographic order
    ///
    /// This is a display cut, not a ranking.
    pub fn top(&self, n: usize) -> Vec<String> {
        self.roots.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_is_sorted_and_bounded() {
        let mut deps = DependencySet::new();
        deps.extend(["zlib", "requests", "os", "abc", "numpy", "os"]);

        assert_eq!(deps.len(), 5);
        assert_eq!(deps.top(3), vec!["abc", "numpy", "os"]);
        assert_eq!(deps.top(TOP_DEPENDENCIES).len(), 5);
        assert!(deps.top(0).is_empty());
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let mut forward = DependencySet::new();
        forward.extend(["b", "a", "c"]);
        let mut backward = DependencySet::new();
        backward.extend(["c", "a", "b"]);

        assert_eq!(forward, backward);
        assert_eq!(forward.top(10), backward.top(10));
    }

    #[test]
    fn test_empty_roots_are_dropped() {
        let mut deps = DependencySet::new();
        deps.insert("");
        assert!(deps.is_empty());
        assert!(!deps.contains(""));
    }

    #[test]
    fn test_top_truncates_at_ten() {
        let mut deps = DependencySet::new();
        deps.extend((0..25).map(|i| format!("mod{:02}", i)));
        let top = deps.top(TOP_DEPENDENCIES);
        assert_eq!(top.len(), TOP_DEPENDENCIES);
        assert_eq!(top.first().map(String::as_str), Some("mod00"));
        assert_eq!(top.last().map(String::as_str), Some("mod09"));
    }
}
