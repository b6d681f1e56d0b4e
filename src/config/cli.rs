//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub paths: Vec<PathBuf>,
    pub repo: Option<String>,
    pub exclude: Vec<String>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
    pub full_clone: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            paths: args.path.clone(),
            repo: args.repo.clone(),
            exclude: args.exclude.clone(),
            max_depth: args.max_depth,
            output_format: args.output.map(Into::into),
            output_file: args.output_file.clone(),
            no_parallel: args.no_parallel,
            jobs: args.jobs,
            full_clone: args.full_clone,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if !self.args.paths.is_empty() {
            settings.scan_paths = Some(self.args.paths.clone());
        }

        if let Some(repo) = &self.args.repo {
            settings.repo_url = Some(repo.clone());
        }

        if !self.args.exclude.is_empty() {
            settings.exclude_patterns = Some(self.args.exclude.clone());
        }

        settings.max_depth = self.args.max_depth;
        settings.output_format = self.args.output_format;
        settings.output_file = self.args.output_file.clone();
        settings.jobs = self.args.jobs;

        // Flags only ever override towards their non-default value
        if self.args.no_parallel {
            settings.parallel = Some(false);
        }

        if self.args.full_clone {
            settings.shallow_clone = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
