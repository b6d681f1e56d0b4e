//! Markdown tour generated from a finished report

use crate::models::report::AnalysisReport;
use crate::models::summary::StructuralSummary;
use crate::models::tree::{DirectoryNode, TreeEntry};
use std::fmt::Write;

/// Dependencies named in the header
pub const HEADER_DEPENDENCIES: usize = 5;

/// Root-level files called out as entry points or configuration
pub const KEY_FILES: [&str; 5] = ["main.py", "app.py", "index.js", "index.tsx", "package.json"];

const ARCHITECTURE: &str = "
## 🔧 Code Architecture

The codebase follows standard conventions with clear separation of concerns. Key patterns identified:

- **Modular Structure** - Code is organized into logical modules
- **Configuration Management** - Settings and dependencies are properly managed
- **Clean Interfaces** - Functions and classes have clear responsibilities

## 📚 Dependencies

This project relies on several key libraries:
";

/// Render the guided tour for `report`
///
/// Output depends on the report alone.
pub fn generate(report: &AnalysisReport) -> String {
    let mut tour = String::new();
    let files = report.total_files();
    let lines = report.total_lines();

    // Writing into a String cannot fail
    let _ = write!(
        tour,
        "# Repository Tour\n\n\
         ## 🏗️ Project Overview\n\
         This repository contains **{files} files** with **{lines} lines of code**.\n\n\
         ## 📊 Quick Stats\n\
         - **Total Files:** {files}\n\
         - **Lines of Code:** {lines}\n\
         - **Key Dependencies:** {deps}\n\n\
         ## 🗂️ Repository Structure\n\n",
        files = files,
        lines = lines,
        deps = report.top_dependencies(HEADER_DEPENDENCIES).join(", "),
    );

    explain_directory(report.root(), 0, &mut tour);

    tour.push_str(
        "\n\n## 🚀 Getting Started\n\n\
         Based on the repository analysis, here's how the code is organized:\n\n",
    );

    let key_files: Vec<&str> = report
        .root()
        .children
        .iter()
        .filter(|(name, entry)| matches!(entry, TreeEntry::File(_)) && KEY_FILES.contains(&name.as_str()))
        .map(|(name, _)| name.as_str())
        .collect();

    if !key_files.is_empty() {
        tour.push_str("### Key Files:\n");
        for name in key_files {
            let _ = writeln!(tour, "- **{}** - Entry point or configuration file", name);
        }
    }

    tour.push_str(ARCHITECTURE);
    for dep in &report.statistics.top_dependencies {
        let _ = writeln!(tour, "- `{}`", dep);
    }

    tour
}

fn explain_directory(dir: &DirectoryNode, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);

    for (name, entry) in &dir.children {
        match entry {
            TreeEntry::Directory(child) => {
                let _ = writeln!(out, "{}- **{}/** - Directory containing:", indent, name);
                explain_directory(child, level + 1, out);
            }
            TreeEntry::File(file) => {
                let description = match file.summary() {
                    Some(StructuralSummary::Python(summary)) if !summary.classes.is_empty() => {
                        format!("Python module with {} classes", summary.classes.len())
                    }
                    Some(StructuralSummary::JavaScript(summary)) if !summary.functions.is_empty() => {
                        format!("JavaScript file with {} functions", summary.functions.len())
                    }
                    _ => format!("{} lines", file.lines()),
                };
                let _ = writeln!(out, "{}- **{}** - {}", indent, name, description);
            }
        }
    }
}
