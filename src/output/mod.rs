//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};

use crate::core::session::AnalysisEnvelope;
use crate::error::Result;
use crate::models::config::OutputFormat;

/// Trait for different output formatters
///
/// Every formatter receives the envelopes of all analyzed roots, successful
/// or not, in the order the roots were given.
pub trait Formatter {
    /// Format analysis envelopes into a string
    fn format(&self, envelopes: &[AnalysisEnvelope]) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, envelopes: &[AnalysisEnvelope]) -> Result<String> {
        let mut output = String::new();

        for (index, envelope) in envelopes.iter().enumerate() {
            if index > 0 && !self.quiet {
                output.push('\n');
            }
            match envelope {
                AnalysisEnvelope::Success { repo_map, repo_url, .. } => {
                    if self.quiet {
                        output.push_str(&formatters::format_report_line(repo_url, repo_map));
                    } else {
                        output.push_str(&formatters::format_report_text(
                            repo_url,
                            repo_map,
                            self.use_colors,
                            self.verbose,
                        ));
                    }
                }
                AnalysisEnvelope::Failure { error, error_kind, .. } => {
                    output.push_str(&formatters::format_failure_text(error, error_kind, self.use_colors));
                }
            }
        }

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, envelopes: &[AnalysisEnvelope]) -> Result<String> {
        formatters::format_envelopes_json(envelopes, self.pretty)
    }
}

/// Markdown formatter emitting the guided tour
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self, envelopes: &[AnalysisEnvelope]) -> Result<String> {
        Ok(formatters::format_tours_markdown(envelopes))
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, envelopes: &[AnalysisEnvelope]) -> Result<String> {
        formatters::format_files_csv(envelopes)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: &OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
