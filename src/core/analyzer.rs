//! Per-file analysis
//!
//! Turns one file on disk into a [`FileNode`]. Nothing here aborts a run:
//! read, decode and extraction problems become the file's recorded outcome.

use crate::models::summary::ContentKind;
use crate::models::tree::{FileAnalysis, FileNode};
use crate::parsers;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Analyzes single files relative to a repository root
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classify, read and summarize the file at `path`
    ///
    /// `relative` is the `/`-separated path recorded on the node.
    pub fn analyze_file(&self, path: &Path, relative: String) -> FileNode {
        let kind = parsers::classify(path);
        let analysis = Self::analyze_content(path, kind);

        debug!(path = %relative, kind = %kind, status = analysis.status(), "analyzed file");

        FileNode {
            path: relative,
            kind,
            analysis,
        }
    }

    fn analyze_content(path: &Path, kind: ContentKind) -> FileAnalysis {
        let content = fs::read(path).map_err(|e| e.to_string()).and_then(|bytes| {
            String::from_utf8(bytes).map_err(|e| format!("content is not valid UTF-8: {}", e))
        });

        match (kind.is_structured(), content) {
            (false, Ok(content)) => FileAnalysis::analyzed(&content, None),
            (false, Err(reason)) => {
                debug!(path = %path.display(), %reason, "unreadable text file");
                FileAnalysis::Unreadable
            }
            (true, Err(error)) => {
                warn!(path = %path.display(), %error, "could not read source file");
                FileAnalysis::Failed { error }
            }
            (true, Ok(content)) => match parsers::extract(kind, path, &content) {
                Ok(summary) => FileAnalysis::analyzed(&content, summary),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "structural extraction failed");
                    FileAnalysis::Failed {
                        error: err.to_string(),
                    }
                }
            },
        }
    }
}
