//! Ephemeral checkout of a remote repository
//!
//! A [`Workspace`] owns a temporary directory for exactly one run. The
//! directory is removed when the workspace is dropped, whichever way the run
//! ends; [`Workspace::close`] removes it eagerly and reports failures.

use crate::error::{RepoMapError, Result};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};

const URL_SCHEMES: [&str; 5] = ["https://", "http://", "ssh://", "git://", "file://"];

/// Name prefix of every workspace directory
pub const WORKSPACE_PREFIX: &str = "repomap-";

/// Temporary directory holding one cloned repository
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    locator: String,
}

impl Workspace {
    /// Clone `locator` into a fresh temporary directory
    ///
    /// With `shallow` only the latest commit is fetched. On failure nothing
    /// is left on disk.
    pub fn clone_repository(locator: &str, shallow: bool) -> Result<Self> {
        Self::clone_repository_in(locator, shallow, &std::env::temp_dir())
    }

    /// Like [`Workspace::clone_repository`], with the workspace created under `parent`
    pub fn clone_repository_in(locator: &str, shallow: bool, parent: &Path) -> Result<Self> {
        validate_locator(locator)?;

        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| RepoMapError::workspace_error(parent, e))?;

        info!(locator, path = %dir.path().display(), shallow, "cloning repository");

        let mut command = Command::new("git");
        command.arg("clone").arg("--quiet");
        if shallow {
            command.args(["--depth", "1"]);
        }
        command.arg("--").arg(locator).arg(dir.path());

        let output = command
            .output()
            .map_err(|e| RepoMapError::acquisition_error(locator, format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("git clone exited with {}", output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(RepoMapError::acquisition_error(locator, message));
        }

        Ok(Self {
            dir,
            locator: locator.to_string(),
        })
    }

    /// Root of the checked-out tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Delete the workspace now instead of on drop
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        debug!(path = %path.display(), "removing workspace");
        self.dir
            .close()
            .map_err(|e| RepoMapError::workspace_error(path, e))
    }
}

/// Reject locators git would misread or that are plainly not repositories
pub fn validate_locator(locator: &str) -> Result<()> {
    let reject = |reason: &str| Err(RepoMapError::acquisition_error(locator, reason));

    if locator.is_empty() {
        return reject("repository locator is empty");
    }
    if locator.chars().any(char::is_whitespace) {
        return reject("repository locator contains whitespace");
    }
    if locator.starts_with('-') {
        return reject("repository locator must not start with '-'");
    }

    if let Some(scheme) = URL_SCHEMES.iter().find(|scheme| locator.starts_with(**scheme)) {
        if locator.len() == scheme.len() {
            return reject("repository locator has no host or path");
        }
        return Ok(());
    }

    if is_scp_like(locator) {
        return Ok(());
    }

    reject("expected an http(s), ssh, git or file URL, or user@host:path")
}

/// `user@host:path` with every part non-empty
fn is_scp_like(locator: &str) -> bool {
    let Some((user, rest)) = locator.split_once('@') else {
        return false;
    };
    let Some((host, path)) = rest.split_once(':') else {
        return false;
    };
    !user.is_empty() && !host.is_empty() && !path.is_empty() && !host.contains('/')
}
