//! RepoMap - structural maps and guided tours of source repositories
//!
//! This library walks a repository, summarizes Python and JavaScript/TypeScript
//! files (imports, classes, functions), aggregates the root-level modules they
//! depend on, and renders the result as a serializable report plus a Markdown
//! tour. Remote repositories are cloned into a workspace that never outlives
//! the run.

#![feature(error_generic_member_access)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::{
    AnalysisEnvelope, AnalysisOptions, AnalysisOutcome, TreeBuilder, Workspace, analyze_directory,
    analyze_remote, analyze_repository,
};
pub use error::{ErrorSeverity, IoResultExt, OptionExt, RepoMapError, Result, ResultExt, tolerate};
pub use models::{AnalysisReport, DirectoryNode, FileAnalysis, FileNode, Settings, StructuralSummary, TreeEntry};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
