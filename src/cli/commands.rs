//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::parallel::analyze_paths;
use crate::core::session::{AnalysisEnvelope, AnalysisOptions, analyze_remote};
use crate::error::{ErrorSeverity, RepoMapError, Result};
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer};
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze local directories or a remote repository
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                debug!(?settings, "resolved settings");
                run_analysis(&settings)
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                println!("\nEdit it to change scan_paths, exclude_patterns, max_depth, output_format and more.");
                println!("REPOMAP_* environment variables and command-line flags override its values.");

                Ok(())
            }
        }
    }

    /// Run the command and map the outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(&err)
            }
        }
    }
}

/// Exit code for a failed run
pub fn exit_code(err: &RepoMapError) -> i32 {
    match err.severity() {
        ErrorSeverity::Warning => 0, // Warnings don't cause failure
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Analyze every configured root, write the formatted result, and report
/// the most severe failure, if any
fn run_analysis(settings: &Settings) -> Result<()> {
    let options = AnalysisOptions::from(settings);
    let mut envelopes = Vec::new();
    let mut failures = Vec::new();

    match &settings.repo_url {
        Some(locator) => match analyze_remote(locator, &options) {
            Ok(outcome) => envelopes.push(AnalysisEnvelope::success(outcome, locator.as_str())),
            Err(err) => {
                envelopes.push(AnalysisEnvelope::failure(&err));
                failures.push(err);
            }
        },
        None => {
            for outcome in analyze_paths(&settings.scan_paths, &options, settings.parallel, settings.jobs)? {
                match outcome.result {
                    Ok(result) => envelopes.push(AnalysisEnvelope::success(result, outcome.path.display().to_string())),
                    Err(err) => {
                        warn!(path = %outcome.path.display(), error = %err, "analysis failed");
                        envelopes.push(AnalysisEnvelope::failure(&err));
                        failures.push(err);
                    }
                }
            }
        }
    }

    let formatter = create_formatter(
        &settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let output = formatter.format(&envelopes)?;
    create_writer(settings.output_file.as_ref()).write(&output)?;

    if failures.len() > 1 {
        error!(failed = failures.len(), total = envelopes.len(), "several roots failed");
    }

    match failures.into_iter().max_by_key(|err| severity_rank(err.severity())) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn severity_rank(severity: ErrorSeverity) -> u8 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
