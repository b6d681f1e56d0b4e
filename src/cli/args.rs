//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// RepoMap - structural map and guided tour of a source repository
#[derive(Parser, Debug)]
#[command(name = "repomap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Map a repository's layout, imports, classes and functions, and write a guided tour")]
#[command(long_about = "RepoMap walks a source repository, summarizes Python modules and JavaScript/TypeScript files \
(imports, classes, functions), counts lines, collects the root-level dependencies they reference, and renders \
the result as a summary, a JSON map, a Markdown tour or a CSV file list. Remote repositories are cloned into a \
temporary directory that is removed when the run ends.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Map the current directory
    repomap

    # Map one or more directories
    repomap --path ./service --path ./web

    # Clone and map a remote repository
    repomap --repo https://github.com/owner/project

    # Skip extra entries by name (hidden files, node_modules, __pycache__ and venv are always skipped)
    repomap --exclude '*.lock' --exclude dist

    # Limit directory traversal depth (0 maps the root directory only)
    repomap --max-depth 2

Output Options:
    # Full map and tour as JSON
    repomap --output json

    # Guided tour as Markdown
    repomap --output markdown --output-file TOUR.md

    # One row per file for spreadsheet analysis
    repomap --output csv

Configuration:
    # Use a specific configuration file
    repomap --config ./repomap.toml

    # Create a default configuration file
    repomap --init
")]
pub struct Args {
    /// Directories to analyze
    #[arg(short, long, value_name = "PATH", help = "Directory to analyze (can be specified multiple times; defaults to the current directory)")]
    pub path: Vec<PathBuf>,

    /// Remote repository to clone and analyze
    #[arg(short, long, value_name = "URL", conflicts_with = "path", help = "Repository URL to clone into a temporary directory and analyze (https, ssh, git, file or user@host:path)")]
    pub repo: Option<String>,

    /// Exclude entries matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for entry names to skip, in addition to the built-in rules (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse below the root (default 4, at most 64)")]
    pub max_depth: Option<usize>,

    /// Output format (text, json, markdown, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' summary, 'json' map and tour, 'markdown' tour, 'csv' file list")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Suppress non-essential output (one line per analyzed root, warnings only in logs)")]
    pub quiet: bool,

    /// Show detailed information
    #[arg(short, long, help = "Show every analyzed file and debug logging")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .repomap.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Analyze several paths one after another instead of in parallel")]
    pub no_parallel: bool,

    /// Worker thread count
    #[arg(short, long, value_name = "N", help = "Number of worker threads when analyzing several paths in parallel")]
    pub jobs: Option<usize>,

    /// Fetch full history when cloning
    #[arg(long, help = "Clone the full history instead of only the latest commit")]
    pub full_clone: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for piping output)")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.repomap.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Map and tour as JSON
    Json,
    /// Guided tour as Markdown
    #[value(alias = "md")]
    Markdown,
    /// One row per analyzed file
    Csv,
}

impl From<OutputFormat> for crate::models::config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Csv => Self::Csv,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
