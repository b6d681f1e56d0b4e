//! Directory traversal producing the repository tree
//!
//! One [`TreeBuilder`] serves one run. It owns the run's accumulators, so
//! several builders can walk different roots at the same time without sharing
//! anything.

use crate::core::analyzer::Analyzer;
use crate::core::ignore::IgnorePolicy;
use crate::error::{IoResultExt, RepoMapError, Result};
use crate::models::report::RunStats;
use crate::models::tree::{DirectoryNode, TreeEntry};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name given to the root node of every tree
pub const ROOT_NAME: &str = ".";

/// Recursive tree builder for a single analysis run
pub struct TreeBuilder {
    policy: IgnorePolicy,
    analyzer: Analyzer,
    stats: RunStats,
}

impl TreeBuilder {
    /// Create a builder with the given ignore policy
    pub fn new(policy: IgnorePolicy) -> Self {
        Self {
            policy,
            analyzer: Analyzer::new(),
            stats: RunStats::new(),
        }
    }

    /// Walk `root` down to `max_depth` and return the pruned tree with the
    /// counters collected along the way
    ///
    /// Depth 0 is `root` itself, so `max_depth == 0` lists the root only.
    pub fn build(mut self, root: &Path, max_depth: usize) -> Result<(DirectoryNode, RunStats)> {
        if !root.is_dir() {
            return Err(RepoMapError::invalid_path(root));
        }

        let mut tree = DirectoryNode::new(ROOT_NAME);
        self.walk(root, "", 0, max_depth, &mut tree)?;
        Ok((tree, self.stats))
    }

    /// Fill `node` with the surviving children of `dir`
    fn walk(
        &mut self,
        dir: &Path,
        prefix: &str,
        current_depth: usize,
        max_depth: usize,
        node: &mut DirectoryNode,
    ) -> Result<()> {
        if current_depth > max_depth {
            return Ok(());
        }

        let listing = match fs::read_dir(dir).at_path(dir) {
            Ok(listing) => listing,
            Err(RepoMapError::PermissionDenied { .. }) => {
                warn!(path = %dir.display(), "permission denied, skipping directory");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let mut entries: Vec<fs::DirEntry> = listing.filter_map(|entry| readable(dir, entry)).collect();
        entries.sort_by_key(|entry| entry.file_name());

        debug!(path = %dir.display(), entries = entries.len(), depth = current_depth, "listing directory");

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.policy.should_skip(&name) {
                continue;
            }

            let path = entry.path();
            let relative = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };

            // Both checks follow symlinks; dangling links and special files fail both
            if path.is_file() {
                let file = self.analyzer.analyze_file(&path, relative);
                let roots = file.summary().map(|s| s.dependency_roots()).unwrap_or_default();
                self.stats.record_file(file.lines(), roots);
                node.children.insert(name, TreeEntry::File(file));
            } else if path.is_dir() {
                let mut child = DirectoryNode::new(name.clone());
                self.walk(&path, &relative, current_depth + 1, max_depth, &mut child)?;
                if !child.is_empty() {
                    node.children.insert(name, TreeEntry::Directory(child));
                }
            } else {
                debug!(path = %path.display(), "skipping entry that is neither file nor directory");
            }
        }

        Ok(())
    }
}

/// An entry that failed to read is logged and dropped from the listing
fn readable<T>(dir: &Path, entry: std::io::Result<T>) -> Option<T> {
    match entry.at_path(dir) {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "skipping unreadable directory entry");
            None
        }
    }
}
