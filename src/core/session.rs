//! End-to-end analysis runs and the response envelope
//!
//! A run is acquire, build, assemble, generate, release. Local runs skip
//! acquisition. Remote runs always release the workspace, including when
//! a later step fails.

use crate::core::ignore::IgnorePolicy;
use crate::core::tour;
use crate::core::walker::TreeBuilder;
use crate::core::workspace::Workspace;
use crate::error::{RepoMapError, Result, tolerate};
use crate::models::config::{DEFAULT_MAX_DEPTH, Settings};
use crate::models::report::AnalysisReport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Largest accepted traversal depth
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Message returned by the liveness probe
pub const LIVENESS_MESSAGE: &str = "RepoMap engine is running!";

/// Knobs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub max_depth: usize,
    pub exclude_patterns: Vec<String>,
    pub shallow_clone: bool,
    /// Directory that holds remote checkouts, the system temp dir if unset
    pub workspace_root: Option<PathBuf>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_patterns: Vec::new(),
            shallow_clone: true,
            workspace_root: None,
        }
    }
}

impl From<&Settings> for AnalysisOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            max_depth: settings.max_depth,
            exclude_patterns: settings.exclude_patterns.clone(),
            shallow_clone: settings.shallow_clone,
            workspace_root: None,
        }
    }
}

impl AnalysisOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RepoMapError::config_error(format!(
                "max_depth {} exceeds the limit of {}",
                self.max_depth, MAX_DEPTH_LIMIT
            )));
        }
        Ok(())
    }
}

/// Report and tour of one completed run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub tour: String,
}

/// Analyze a local directory
pub fn analyze_directory(path: &Path, options: &AnalysisOptions) -> Result<AnalysisOutcome> {
    options.validate()?;
    let policy = IgnorePolicy::with_patterns(&options.exclude_patterns)?;

    let start = Instant::now();
    info!(path = %path.display(), max_depth = options.max_depth, "starting analysis");

    let (tree, stats) = TreeBuilder::new(policy).build(path, options.max_depth)?;
    let report = AnalysisReport::assemble(tree, &stats, options.max_depth);
    let tour = tour::generate(&report);

    info!(
        path = %path.display(),
        files = report.total_files(),
        lines = report.total_lines(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "analysis finished"
    );

    Ok(AnalysisOutcome { report, tour })
}

/// Clone `locator`, analyze the checkout and remove it again
pub fn analyze_remote(locator: &str, options: &AnalysisOptions) -> Result<AnalysisOutcome> {
    options.validate()?;
    let workspace = match &options.workspace_root {
        Some(parent) => Workspace::clone_repository_in(locator, options.shallow_clone, parent)?,
        None => Workspace::clone_repository(locator, options.shallow_clone)?,
    };

    // On error the workspace is removed by drop
    let outcome = analyze_directory(workspace.path(), options)?;

    // A leftover temporary directory is logged, not fatal
    tolerate("release workspace", workspace.close())?;
    Ok(outcome)
}

/// Remote analysis wrapped in the response envelope
pub fn analyze_repository(locator: &str, options: &AnalysisOptions) -> AnalysisEnvelope {
    match analyze_remote(locator, options) {
        Ok(outcome) => AnalysisEnvelope::success(outcome, locator),
        Err(err) => AnalysisEnvelope::failure(&err),
    }
}

/// Response shape shared by every entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisEnvelope {
    Success {
        success: bool,
        repo_map: AnalysisReport,
        repo_tour: String,
        repo_url: String,
    },
    Failure {
        success: bool,
        error: String,
        error_kind: String,
    },
}

impl AnalysisEnvelope {
    pub fn success(outcome: AnalysisOutcome, repo_url: impl Into<String>) -> Self {
        AnalysisEnvelope::Success {
            success: true,
            repo_map: outcome.report,
            repo_tour: outcome.tour,
            repo_url: repo_url.into(),
        }
    }

    pub fn failure(err: &RepoMapError) -> Self {
        AnalysisEnvelope::Failure {
            success: false,
            error: err.user_message(),
            error_kind: err.kind().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisEnvelope::Success { .. })
    }

    /// Static liveness payload
    pub fn liveness() -> serde_json::Value {
        serde_json::json!({ "message": LIVENESS_MESSAGE })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workspace::tests::{leftovers, local_repository};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_depth_limit() {
        let options = AnalysisOptions {
            max_depth: MAX_DEPTH_LIMIT + 1,
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.is_critical());

        let options = AnalysisOptions {
            max_depth: MAX_DEPTH_LIMIT,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_analyze_directory_produces_report_and_tour() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main.py"), "import flask\n\nclass App:\n    pass\n").unwrap();

        let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(outcome.report.total_files(), 1);
        assert_eq!(outcome.report.statistics.top_dependencies, vec!["flask"]);
        assert!(outcome.tour.contains("- **main.py** - Python module with 1 classes"));
    }

    #[test]
    fn test_malformed_locator_gives_failure_envelope() {
        let envelope = analyze_repository("not a repository", &AnalysisOptions::default());
        assert!(!envelope.is_success());

        let value: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error_kind"], "acquisition");
        assert!(!value["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_success_envelope_shape() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();

        let envelope = AnalysisEnvelope::success(outcome, "https://example.com/repo");
        let value: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["repo_url"], "https://example.com/repo");
        assert_eq!(value["repo_map"]["statistics"]["total_files"], 1);
        assert!(value["repo_tour"].as_str().unwrap().starts_with("# Repository Tour"));
    }

    #[test]
    fn test_liveness() {
        assert_eq!(AnalysisEnvelope::liveness()["message"], LIVENESS_MESSAGE);
    }

    #[test]
    fn test_remote_run_releases_workspace() {
        let origin = tempdir().unwrap();
        let Some(locator) = local_repository(origin.path()) else {
            return;
        };
        let parent = tempdir().unwrap();
        let options = AnalysisOptions {
            workspace_root: Some(parent.path().to_path_buf()),
            ..Default::default()
        };

        let outcome = analyze_remote(&locator, &options).unwrap();
        assert_eq!(outcome.report.total_files(), 1);
        assert_eq!(outcome.report.statistics.top_dependencies, vec!["os"]);
        assert!(leftovers(parent.path()).is_empty());
    }

    #[test]
    fn test_failed_analysis_releases_workspace() {
        let origin = tempdir().unwrap();
        let Some(locator) = local_repository(origin.path()) else {
            return;
        };
        let parent = tempdir().unwrap();
        // The pattern is only compiled after the checkout exists
        let options = AnalysisOptions {
            exclude_patterns: vec!["[".to_string()],
            workspace_root: Some(parent.path().to_path_buf()),
            ..Default::default()
        };

        let envelope = analyze_repository(&locator, &options);
        assert!(!envelope.is_success());
        assert!(leftovers(parent.path()).is_empty());
    }

    #[test]
    fn test_malformed_locator_leaves_no_workspace() {
        let parent = tempdir().unwrap();
        let options = AnalysisOptions {
            workspace_root: Some(parent.path().to_path_buf()),
            ..Default::default()
        };

        let envelope = analyze_repository("not a repository", &options);
        assert!(!envelope.is_success());
        assert!(leftovers(parent.path()).is_empty());
    }
}
