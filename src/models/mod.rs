//! Data models and structures for RepoMap

pub mod config;
pub mod dependencies;
pub mod report;
pub mod summary;
pub mod tree;

pub use config::Settings;
pub use dependencies::DependencySet;
pub use report::{AnalysisReport, RunStats};
pub use summary::{ContentKind, StructuralSummary};
pub use tree::{DirectoryNode, FileAnalysis, FileNode, TreeEntry};
