//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default traversal depth below the repository root
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Main configuration settings for RepoMap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Local directories to analyze
    pub scan_paths: Vec<PathBuf>,

    /// Remote repository to clone and analyze instead of local paths
    pub repo_url: Option<String>,

    /// Glob patterns for entry names to skip, on top of the built-in rules
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: usize,

    /// Output format (text, json, markdown, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to analyze several paths in parallel
    pub parallel: bool,

    /// Worker threads for parallel analysis (rayon default if unset)
    pub jobs: Option<usize>,

    /// Whether to clone only the latest commit
    pub shallow_clone: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_paths: vec![PathBuf::from(".")],
            repo_url: None,
            exclude_patterns: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            output_format: OutputFormat::Text,
            output_file: None,
            parallel: true,
            jobs: None,
            shallow_clone: true,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full report and tour as JSON
    Json,
    /// The guided tour as Markdown
    Markdown,
    /// One row per analyzed file
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_paths: Option<Vec<PathBuf>>,
    pub repo_url: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub jobs: Option<usize>,
    pub shallow_clone: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            scan_paths,
            repo_url,
            exclude_patterns,
            max_depth,
            output_format,
            output_file,
            parallel,
            jobs,
            shallow_clone,
            quiet,
            verbose,
            use_colors,
        );
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_paths) = &self.scan_paths {
            settings.scan_paths = scan_paths.clone();
        }
        if let Some(repo_url) = &self.repo_url {
            settings.repo_url = Some(repo_url.clone());
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(jobs) = self.jobs {
            settings.jobs = Some(jobs);
        }
        if let Some(shallow_clone) = self.shallow_clone {
            settings.shallow_clone = shallow_clone;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
