//! Validation of fully merged settings

use crate::core::session::MAX_DEPTH_LIMIT;
use crate::core::workspace::validate_locator;
use crate::error::{RepoMapError, Result};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        match &settings.repo_url {
            Some(locator) => validate_locator(locator)?,
            None => {
                if settings.scan_paths.is_empty() {
                    return Err(RepoMapError::config_error("No scan paths configured"));
                }
                for path in &settings.scan_paths {
                    if !path.is_dir() {
                        return Err(RepoMapError::invalid_path(path));
                    }
                }
            }
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if settings.max_depth > MAX_DEPTH_LIMIT {
            return Err(RepoMapError::config_error(format!(
                "Max depth {} exceeds the limit of {}",
                settings.max_depth, MAX_DEPTH_LIMIT
            )));
        }

        if settings.jobs == Some(0) {
            return Err(RepoMapError::config_error("Jobs must be at least 1"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) if !parent.is_dir() => Err(RepoMapError::OutputDirectoryNotFound {
                path: parent.to_path_buf(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            }),
            _ => Ok(()),
        }
    }
}
