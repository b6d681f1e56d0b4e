//! Per-file structural summaries
//!
//! A summary is only produced for structured content kinds. Python summaries
//! carry declaration lines; JavaScript summaries are pattern-derived and do not.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Classification of a file governing which extractor applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// `.py`, parsed into a syntax tree
    Python,
    /// `.js`, `.jsx`, `.ts`, `.tsx`, scanned with fixed patterns
    JavaScript,
    /// Anything else, counted as plain text
    Text,
}

impl ContentKind {
    /// Whether files of this kind get a structural summary
    pub fn is_structured(self) -> bool {
        !matches!(self, ContentKind::Text)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Python => write!(f, "python"),
            ContentKind::JavaScript => write!(f, "javascript"),
            ContentKind::Text => write!(f, "text"),
        }
    }
}

/// One import reference of a Python module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRef {
    /// `import a.b`
    Module(String),
    /// `from a.b import c`
    From(String),
}

impl ImportRef {
    /// The dotted module name, without the `from` qualifier
    pub fn module(&self) -> &str {
        match self {
            ImportRef::Module(module) | ImportRef::From(module) => module,
        }
    }

    /// First dot-separated segment of the module name
    pub fn root(&self) -> &str {
        self.module().split('.').next().unwrap_or_default()
    }
}

impl fmt::Display for ImportRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportRef::Module(module) => write!(f, "{}", module),
            ImportRef::From(module) => write!(f, "from {}", module),
        }
    }
}

impl Serialize for ImportRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImportRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.strip_prefix("from ") {
            Some(module) => ImportRef::From(module.to_string()),
            None => ImportRef::Module(raw),
        })
    }
}

/// A class declared in a Python module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    /// 1-based declaration line
    pub line: usize,
    /// Functions declared directly in the class body
    pub methods: Vec<String>,
}

/// A function the top-level heuristic kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub line: usize,
    pub args: Vec<String>,
}

/// Summary extracted from a Python syntax tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonSummary {
    pub imports: Vec<ImportRef>,
    pub classes: Vec<ClassInfo>,
    pub functions: Vec<FunctionInfo>,
}

/// Summary extracted from JavaScript/TypeScript by pattern matching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub imports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

/// Structural summary, tagged by the content kind that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum StructuralSummary {
    Python(PythonSummary),
    JavaScript(ScriptSummary),
}

impl StructuralSummary {
    /// Content kind this summary belongs to
    pub fn kind(&self) -> ContentKind {
        match self {
            StructuralSummary::Python(_) => ContentKind::Python,
            StructuralSummary::JavaScript(_) => ContentKind::JavaScript,
        }
    }

    /// Number of declared types
    pub fn type_count(&self) -> usize {
        match self {
            StructuralSummary::Python(summary) => summary.classes.len(),
            StructuralSummary::JavaScript(summary) => summary.classes.len(),
        }
    }

    /// Number of callables recorded (top-level only for Python)
    pub fn callable_count(&self) -> usize {
        match self {
            StructuralSummary::Python(summary) => summary.functions.len(),
            StructuralSummary::JavaScript(summary) => summary.functions.len(),
        }
    }

    /// Number of import references
    pub fn import_count(&self) -> usize {
        match self {
            StructuralSummary::Python(summary) => summary.imports.len(),
            StructuralSummary::JavaScript(summary) => summary.imports.len(),
        }
    }

    /// Root identifiers of every import, in import order, duplicates kept
    pub fn dependency_roots(&self) -> Vec<&str> {
        match self {
            StructuralSummary::Python(summary) => {
                summary.imports.iter().map(ImportRef::root).collect()
            }
            StructuralSummary::JavaScript(summary) => summary
                .imports
                .iter()
                .map(|path| path.split('/').next().unwrap_or_default())
                .collect(),
        }
    }
}
