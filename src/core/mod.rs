//! The analysis engine: traversal, per-file analysis, tour and run plumbing

pub mod analyzer;
pub mod ignore;
pub mod parallel;
pub mod session;
pub mod tour;
pub mod walker;
pub mod workspace;

pub use analyzer::Analyzer;
pub use ignore::IgnorePolicy;
pub use session::{
    AnalysisEnvelope, AnalysisOptions, AnalysisOutcome, analyze_directory, analyze_remote,
    analyze_repository,
};
pub use walker::TreeBuilder;
pub use workspace::Workspace;
