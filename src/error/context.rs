//! Attaching run context to lower-level failures

use crate::error::{ErrorSeverity, RepoMapError, Result};
use std::fmt::Display;
use std::io;
use std::path::Path;
use tracing::{error, warn};

/// Context for filesystem results met while walking a tree
pub trait IoResultExt<T> {
    /// Tag a failure with the directory or entry it concerns
    ///
    /// Access restrictions become [`RepoMapError::PermissionDenied`], which
    /// traversal treats as a skip. Anything else is a traversal error.
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => RepoMapError::permission_denied(path),
            _ => RepoMapError::directory_traversal_error(path, err.to_string()),
        })
    }
}

/// Context for failures that concern the run as a whole
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|err| RepoMapError::analysis_error(format!("{}: {}", context(), err)))
    }
}

pub trait OptionExt<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RepoMapError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> RepoMapError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Outcome of a step that must not throw away work already done
///
/// A Warning or Error failure is logged against `step` and yields `Ok(None)`.
/// Only a Critical failure is handed back.
pub fn tolerate<T>(step: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.severity() {
            ErrorSeverity::Warning => {
                warn!(step, error = %err, "step failed, continuing");
                Ok(None)
            }
            ErrorSeverity::Error => {
                error!(step, error = %err, "step failed, continuing");
                Ok(None)
            }
            ErrorSeverity::Critical => Err(err),
        },
    }
}
