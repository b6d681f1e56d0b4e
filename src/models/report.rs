//! Analysis report assembled once per run
//!
//! The report is the externally visible map of a repository: the pruned tree,
//! the run totals and the bounded dependency view. It is built after traversal
//! completes and never mutated afterwards.

use super::dependencies::{DependencySet, TOP_DEPENDENCIES};
use super::tree::DirectoryNode;
use crate::error::ResultExt;
use serde::{Deserialize, Serialize};

/// File extensions the engine recognizes, reported as static metadata
pub const ANALYZED_FILE_TYPES: [&str; 7] = [".py", ".js", ".jsx", ".ts", ".tsx", ".json", ".md"];

/// Accumulators owned by exactly one run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub total_files: usize,
    pub total_lines: usize,
    pub dependencies: DependencySet,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one visited file
    pub fn record_file<'a, I>(&mut self, lines: usize, roots: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.total_files += 1;
        self.total_lines += lines;
        self.dependencies.extend(roots);
    }
}

/// Aggregate counts shown alongside the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_files: usize,
    pub total_lines: usize,
    pub top_dependencies: Vec<String>,
}

/// Static facts about how the analysis was run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub analyzed_file_types: Vec<String>,
    pub max_depth: usize,
}

/// Complete map of one repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub repository_structure: DirectoryNode,
    pub statistics: Statistics,
    pub analysis_metadata: AnalysisMetadata,
}

impl AnalysisReport {
    /// Package a finished tree and the run's accumulators
    pub fn assemble(root: DirectoryNode, stats: &RunStats, max_depth: usize) -> Self {
        Self {
            repository_structure: root,
            statistics: Statistics {
                total_files: stats.total_files,
                total_lines: stats.total_lines,
                top_dependencies: stats.dependencies.top(TOP_DEPENDENCIES),
            },
            analysis_metadata: AnalysisMetadata {
                analyzed_file_types: ANALYZED_FILE_TYPES.iter().map(|ext| ext.to_string()).collect(),
                max_depth,
            },
        }
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.repository_structure
    }

    pub fn total_files(&self) -> usize {
        self.statistics.total_files
    }

    pub fn total_lines(&self) -> usize {
        self.statistics.total_lines
    }

    /// Up to `n` dependency names from the already bounded view
    pub fn top_dependencies(&self, n: usize) -> &[String] {
        let deps = &self.statistics.top_dependencies;
        &deps[..n.min(deps.len())]
    }

    /// Serialize the report as pretty JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to serialize analysis report")
    }
}
