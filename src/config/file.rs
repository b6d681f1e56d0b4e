//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{ConfigSource, parser};
use crate::error::{RepoMapError, Result};
use crate::models::config::{OutputFormat, PartialSettings};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".repomap.toml";

/// Default prefix for environment variables
pub const DEFAULT_ENV_PREFIX: &str = "REPOMAP";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20, // Higher priority than defaults but lower than environment and CLI
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(RepoMapError::ConfigNotFound {
                path: self.path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_<SETTING>` variables, e.g. `REPOMAP_MAX_DEPTH`. List
/// settings are comma-separated.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

/// Settings readable from the environment, by variable suffix
const ENV_KEYS: [&str; 12] = [
    "SCAN_PATHS",
    "REPO_URL",
    "EXCLUDE",
    "MAX_DEPTH",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "PARALLEL",
    "JOBS",
    "SHALLOW_CLONE",
    "QUIET",
    "VERBOSE",
    "USE_COLORS",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 25,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>> {
        match self.var(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
                RepoMapError::config_error(format!("Invalid value '{}' for {}_{}", raw, self.prefix, key))
            }),
        }
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.var(key) {
            None => Ok(None),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                _ => Err(RepoMapError::config_error(format!(
                    "Invalid boolean '{}' for {}_{}",
                    raw, self.prefix, key
                ))),
            },
        }
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let output_format = match self.var("OUTPUT_FORMAT") {
            Some(raw) => Some(raw.parse::<OutputFormat>().map_err(RepoMapError::config_error)?),
            None => None,
        };

        Ok(PartialSettings {
            scan_paths: self
                .list("SCAN_PATHS")
                .map(|paths| paths.into_iter().map(PathBuf::from).collect()),
            repo_url: self.var("REPO_URL"),
            exclude_patterns: self.list("EXCLUDE"),
            max_depth: self.parsed("MAX_DEPTH")?,
            output_format,
            output_file: self.var("OUTPUT_FILE").map(PathBuf::from),
            parallel: self.flag("PARALLEL")?,
            jobs: self.parsed("JOBS")?,
            shallow_clone: self.flag("SHALLOW_CLONE")?,
            quiet: self.flag("QUIET")?,
            verbose: self.flag("VERBOSE")?,
            use_colors: self.flag("USE_COLORS")?,
        })
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
