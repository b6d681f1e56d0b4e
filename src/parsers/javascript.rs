//! Pattern-based summary for JavaScript and TypeScript sources
//!
//! No syntax tree is built. Three independent searches run over the whole
//! content, so a name can be reported by more than one pattern and nothing
//! here can fail.

use crate::models::summary::ScriptSummary;
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_FROM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import.*from ['"]([^'"]+)['"]"#).expect("import pattern is valid"));

static CALLABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"function\s+(\w+)|const\s+(\w+)\s*=.*=>").expect("callable pattern is valid")
});

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("class pattern is valid"));

/// Scan `content` for imports, callables and classes
pub fn extract(content: &str) -> ScriptSummary {
    let imports = IMPORT_FROM
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    let functions = CALLABLE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();

    let classes = CLASS
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    ScriptSummary {
        imports,
        functions,
        classes,
    }
}
