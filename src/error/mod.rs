//! Error handling for RepoMap
//!
//! Error types, the crate-wide result alias, and helpers for attaching context
//! and deciding whether a failure is local to one file or fatal to a run.

pub mod context;
pub mod types;

pub use context::{IoResultExt, OptionExt, ResultExt, tolerate};
pub use types::{ErrorSeverity, RepoMapError, Result};
