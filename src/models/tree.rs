//! Repository tree produced by a single traversal

use super::summary::{ContentKind, StructuralSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of characters kept in a file preview
pub const PREVIEW_CHARS: usize = 200;

/// Marker appended to a preview that was cut short
pub const PREVIEW_ELLIPSIS: &str = "...";

/// A directory with at least one surviving child
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    /// Children keyed by entry name, ordered by name
    pub children: BTreeMap<String, TreeEntry>,
}

impl DirectoryNode {
    /// Create an empty directory node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Whether nothing survived traversal below this directory
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a descendant by `/`-separated path relative to this node
    pub fn get(&self, relative: &str) -> Option<&TreeEntry> {
        let mut segments = relative.split('/').filter(|s| !s.is_empty());
        let first = segments.next()?;
        let mut entry = self.children.get(first)?;
        for segment in segments {
            match entry {
                TreeEntry::Directory(dir) => entry = dir.children.get(segment)?,
                TreeEntry::File(_) => return None,
            }
        }
        Some(entry)
    }

    /// All files below this node, depth-first in name order
    pub fn files(&self) -> Vec<&FileNode> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileNode>) {
        for entry in self.children.values() {
            match entry {
                TreeEntry::File(file) => out.push(file),
                TreeEntry::Directory(dir) => dir.collect_files(out),
            }
        }
    }
}

/// Child of a directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeEntry {
    File(FileNode),
    Directory(DirectoryNode),
}

/// A file and what analysis made of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    /// Path relative to the analyzed root, `/`-separated
    pub path: String,
    pub kind: ContentKind,
    pub analysis: FileAnalysis,
}

impl FileNode {
    /// Entry name of the file
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Line count, zero for failed or unreadable files
    pub fn lines(&self) -> usize {
        match &self.analysis {
            FileAnalysis::Analyzed { lines, .. } => *lines,
            FileAnalysis::Failed { .. } | FileAnalysis::Unreadable => 0,
        }
    }

    /// Structural summary, if extraction ran and succeeded
    pub fn summary(&self) -> Option<&StructuralSummary> {
        match &self.analysis {
            FileAnalysis::Analyzed { summary, .. } => summary.as_ref(),
            _ => None,
        }
    }

    /// Error text of a failed extraction
    pub fn error(&self) -> Option<&str> {
        match &self.analysis {
            FileAnalysis::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Outcome of analyzing one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileAnalysis {
    /// Content was read; structured kinds also carry a summary
    Analyzed {
        lines: usize,
        content_preview: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<StructuralSummary>,
    },
    /// Structured extraction failed
    Failed { error: String },
    /// Content could not be read as text
    Unreadable,
}

impl FileAnalysis {
    /// Build the analyzed outcome for already decoded content
    pub fn analyzed(content: &str, summary: Option<StructuralSummary>) -> Self {
        FileAnalysis::Analyzed {
            lines: count_lines(content),
            content_preview: preview(content),
            summary,
        }
    }

    /// Short status label
    pub fn status(&self) -> &'static str {
        match self {
            FileAnalysis::Analyzed { .. } => "analyzed",
            FileAnalysis::Failed { .. } => "failed",
            FileAnalysis::Unreadable => "unreadable",
        }
    }
}

/// Characters that end a line, besides the `\r\n` pair
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Number of lines in decoded content
///
/// `\r\n` is one break and a trailing break does not start another line.
pub fn count_lines(content: &str) -> usize {
    let mut breaks = 0;
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
        }
        if LINE_BREAKS.contains(&c) {
            breaks += 1;
        }
    }

    match content.chars().last() {
        None => 0,
        Some(last) if LINE_BREAKS.contains(&last) => breaks,
        Some(_) => breaks + 1,
    }
}

/// First [`PREVIEW_CHARS`] characters, with [`PREVIEW_ELLIPSIS`] if truncated
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], PREVIEW_ELLIPSIS),
        None => content.to_string(),
    }
}
