//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::core::session::AnalysisEnvelope;
use crate::error::{RepoMapError, Result};
use crate::models::report::AnalysisReport;
use crate::models::summary::StructuralSummary;
use crate::models::tree::{FileAnalysis, FileNode};
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

fn paint(text: impl Into<String>, style: Style, use_colors: bool) -> String {
    let text = text.into();
    if use_colors {
        style.paint(text).to_string()
    } else {
        text
    }
}

/// One-line summary used in quiet mode
pub fn format_report_line(source: &str, report: &AnalysisReport) -> String {
    format!(
        "{}: {} files, {} lines\n",
        source,
        report.total_files(),
        report.total_lines()
    )
}

/// Format a report as a text summary
pub fn format_report_text(
    source: &str,
    report: &AnalysisReport,
    use_colors: bool,
    verbose: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", paint("Repository Map", Blue.bold(), use_colors)));
    output.push_str(&format!("Source: {}\n", paint(source, Style::new().dimmed(), use_colors)));
    output.push_str(&format!("Total files: {}\n", report.total_files()));
    output.push_str(&format!("Total lines: {}\n", report.total_lines()));
    output.push_str(&format!("Max depth: {}\n", report.analysis_metadata.max_depth));

    let deps = &report.statistics.top_dependencies;
    if deps.is_empty() {
        output.push_str("Top dependencies: none\n");
    } else {
        let names: Vec<String> = deps
            .iter()
            .map(|dep| paint(dep.as_str(), Cyan.normal(), use_colors))
            .collect();
        output.push_str(&format!("Top dependencies: {}\n", names.join(", ")));
    }

    let files = report.root().files();
    let failed: Vec<&&FileNode> = files
        .iter()
        .filter(|f| matches!(f.analysis, FileAnalysis::Failed { .. }))
        .collect();
    let unreadable = files
        .iter()
        .filter(|f| matches!(f.analysis, FileAnalysis::Unreadable))
        .count();

    output.push_str("\nFile Outcomes:\n");
    output.push_str(&format!("  Analyzed: {}\n", files.len() - failed.len() - unreadable));
    output.push_str(&format!("  Failed: {}\n", failed.len()));
    output.push_str(&format!("  Unreadable: {}\n", unreadable));

    if !failed.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            paint(format!("Extraction failures: {}", failed.len()), Yellow.bold(), use_colors)
        ));
        for file in &failed {
            output.push_str(&format!(
                "  [{}] {}: {}\n",
                paint("WARNING", Yellow.normal(), use_colors),
                file.path,
                file.error().unwrap_or_default()
            ));
        }
    }

    if verbose {
        output.push_str("\nFiles:\n");
        for file in &files {
            output.push_str(&format_file_text(file, use_colors));
        }
    }

    output
}

/// Format a single file as one indented line
pub fn format_file_text(file: &FileNode, use_colors: bool) -> String {
    let status = match &file.analysis {
        FileAnalysis::Analyzed { .. } => paint("ok", Green.normal(), use_colors),
        FileAnalysis::Failed { .. } => paint("failed", Red.normal(), use_colors),
        FileAnalysis::Unreadable => paint("unreadable", Yellow.normal(), use_colors),
    };

    let mut line = format!("  {} [{}] {} ({} lines)", file.path, file.kind, status, file.lines());
    if let Some(summary) = file.summary() {
        line.push_str(&format!(
            " types: {}, callables: {}, imports: {}",
            summary.type_count(),
            summary.callable_count(),
            summary.import_count()
        ));
    }
    line.push('\n');
    line
}

/// Format a failed run
pub fn format_failure_text(error: &str, error_kind: &str, use_colors: bool) -> String {
    format!(
        "{} ({}): {}\n",
        paint("Analysis failed", Red.bold(), use_colors),
        error_kind,
        error
    )
}

/// Format envelopes as JSON: a single object for one root, an array otherwise
pub fn format_envelopes_json(envelopes: &[AnalysisEnvelope], pretty: bool) -> Result<String> {
    let json = match (envelopes, pretty) {
        ([single], true) => serde_json::to_string_pretty(single),
        ([single], false) => serde_json::to_string(single),
        (many, true) => serde_json::to_string_pretty(many),
        (many, false) => serde_json::to_string(many),
    };

    json.map_err(|e| RepoMapError::JsonSerialize {
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })
}

/// Concatenate the guided tours, separated by horizontal rules
pub fn format_tours_markdown(envelopes: &[AnalysisEnvelope]) -> String {
    let sections: Vec<String> = envelopes
        .iter()
        .map(|envelope| match envelope {
            AnalysisEnvelope::Success { repo_tour, .. } => repo_tour.clone(),
            AnalysisEnvelope::Failure { error, .. } => {
                format!("# Repository Tour\n\n> Analysis failed: {}\n", error)
            }
        })
        .collect();

    sections.join("\n---\n\n")
}

/// Format one row per analyzed file as CSV
pub fn format_files_csv(envelopes: &[AnalysisEnvelope]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "source",
        "path",
        "kind",
        "status",
        "lines",
        "types",
        "callables",
        "imports",
    ])?;

    for envelope in envelopes {
        let AnalysisEnvelope::Success { repo_map, repo_url, .. } = envelope else {
            continue;
        };

        for file in repo_map.root().files() {
            let count = |f: fn(&StructuralSummary) -> usize| {
                file.summary().map(f).map(|n| n.to_string()).unwrap_or_default()
            };

            writer.write_record([
                repo_url.clone(),
                file.path.clone(),
                file.kind.to_string(),
                file.analysis.status().to_string(),
                file.lines().to_string(),
                count(StructuralSummary::type_count),
                count(StructuralSummary::callable_count),
                count(StructuralSummary::import_count),
            ])?;
        }
    }

    let data = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?).map_err(|e| {
        RepoMapError::CsvSerialize {
            source: e,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    })?;

    Ok(data)
}
