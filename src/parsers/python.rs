//! Python structural extraction on top of tree-sitter
//!
//! The module is parsed into a concrete syntax tree which is then walked once,
//! breadth-first. Imports, classes and functions are recorded as they are met.
//!
//! Whether a function counts as top-level is decided purely by line numbers: a
//! function declared on or after the line of any class in the file is dropped.
//! This also drops module-level functions that merely follow a class.
//!
//! Only plain `def` is recorded; `async def` is never a function or method.
//! The grammar still accepts Python 2 `print` and `exec` statements, which are
//! rejected here as syntax errors.

use crate::error::{OptionExt, RepoMapError, Result};
use crate::models::summary::{ClassInfo, FunctionInfo, ImportRef, PythonSummary};
use std::collections::VecDeque;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Parse `content` and summarize its imports, classes and top-level functions
pub fn extract(path: &Path, content: &str) -> Result<PythonSummary> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| RepoMapError::extraction_error(path, format!("failed to load Python grammar: {}", e)))?;

    let tree = parser
        .parse(content, None)
        .ok_or_error(|| RepoMapError::extraction_error(path, "parser produced no syntax tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        let line = first_error_line(root).unwrap_or(1);
        return Err(RepoMapError::extraction_error(
            path,
            format!("invalid syntax at line {}", line),
        ));
    }

    let mut summary = PythonSummary::default();
    let mut candidates = Vec::new();
    let mut legacy: Option<(usize, &str)> = None;

    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        match node.kind() {
            "import_statement" => collect_plain_imports(node, content, &mut summary.imports),
            "import_from_statement" => {
                if let Some(module) = from_module(node, content) {
                    summary.imports.push(ImportRef::From(module));
                }
            }
            "future_import_statement" => {
                summary.imports.push(ImportRef::From("__future__".to_string()));
            }
            "class_definition" => {
                if let Some(class) = class_info(node, content) {
                    summary.classes.push(class);
                }
            }
            "function_definition" if !is_async(node) => {
                if let Some(function) = function_info(node, content) {
                    candidates.push(function);
                }
            }
            kind @ ("print_statement" | "exec_statement") => {
                let line = line_of(node);
                if legacy.map_or(true, |(first, _)| line < first) {
                    legacy = Some((line, kind));
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        queue.extend(node.named_children(&mut cursor));
    }

    if let Some((line, kind)) = legacy {
        let message = match kind {
            "print_statement" => format!("Missing parentheses in call to 'print' at line {}", line),
            _ => format!("invalid syntax at line {}", line),
        };
        return Err(RepoMapError::extraction_error(path, message));
    }

    summary.functions = candidates
        .into_iter()
        .filter(|function| !summary.classes.iter().any(|class| function.line >= class.line))
        .collect();

    Ok(summary)
}

fn text<'a>(node: Node, content: &'a str) -> &'a str {
    &content[node.byte_range()]
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

/// `async def` carries a leading `async` keyword token
fn is_async(node: Node) -> bool {
    node.child(0).is_some_and(|first| first.kind() == "async")
}

/// Line of the first error or missing node, depth-first
fn first_error_line(root: Node) -> Option<usize> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(line_of(node));
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

/// `import a.b, c as d` yields `a.b` and `c`
fn collect_plain_imports(node: Node, content: &str, imports: &mut Vec<ImportRef>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let module = match name.kind() {
            "aliased_import" => name.child_by_field_name("name").map(|n| text(n, content)),
            "dotted_name" => Some(text(name, content)),
            _ => None,
        };
        if let Some(module) = module {
            imports.push(ImportRef::Module(module.to_string()));
        }
    }
}

/// Module of a `from ... import` statement; `None` for a bare relative prefix
fn from_module(node: Node, content: &str) -> Option<String> {
    let module = node.child_by_field_name("module_name")?;
    match module.kind() {
        "dotted_name" => Some(text(module, content).to_string()),
        "relative_import" => {
            let mut cursor = module.walk();
            let dotted = module
                .named_children(&mut cursor)
                .find(|child| child.kind() == "dotted_name");
            dotted.map(|name| text(name, content).to_string())
        }
        _ => None,
    }
}

fn class_info(node: Node, content: &str) -> Option<ClassInfo> {
    let name = node.child_by_field_name("name")?;
    let mut methods = Vec::new();

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let definition = match member.kind() {
                "function_definition" => Some(member),
                "decorated_definition" => member
                    .child_by_field_name("definition")
                    .filter(|def| def.kind() == "function_definition"),
                _ => None,
            }
            .filter(|def| !is_async(*def));
            if let Some(method) = definition.and_then(|def| def.child_by_field_name("name")) {
                methods.push(text(method, content).to_string());
            }
        }
    }

    Some(ClassInfo {
        name: text(name, content).to_string(),
        line: line_of(node),
        methods,
    })
}

fn function_info(node: Node, content: &str) -> Option<FunctionInfo> {
    let name = node.child_by_field_name("name")?;
    let args = node
        .child_by_field_name("parameters")
        .map(|params| positional_parameters(params, content))
        .unwrap_or_default();

    Some(FunctionInfo {
        name: text(name, content).to_string(),
        line: line_of(node),
        args,
    })
}

/// Plain positional parameter names
///
/// Collection stops at `*`, `*args` or `**kwargs`; names before a `/` are
/// positional-only and discarded.
fn positional_parameters(params: Node, content: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        let name = match param.kind() {
            "identifier" => Some(param),
            "default_parameter" | "typed_default_parameter" => param
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier"),
            "typed_parameter" => match param.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => Some(inner),
                _ => break,
            },
            "positional_separator" => {
                names.clear();
                None
            }
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => None,
        };
        if let Some(name) = name {
            names.push(text(name, content).to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(source: &str) -> PythonSummary {
        extract(Path::new("test.py"), source).expect("source should parse")
    }

    fn names(functions: &[FunctionInfo]) -> Vec<&str> {
        functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_top_level_function_before_class() {
        let summary = summarize("def baz():\n    pass\nclass Foo:\n    def bar(self):\n        pass\n");

        assert_eq!(names(&summary.functions), vec!["baz"]);
        assert_eq!(summary.functions[0].line, 1);
        assert_eq!(
            summary.classes,
            vec![ClassInfo {
                name: "Foo".to_string(),
                line: 3,
                methods: vec!["bar".to_string()],
            }]
        );
    }

    #[test]
    fn test_function_after_any_class_is_dropped() {
        let source = "class A:\n    pass\n\ndef helper():\n    pass\n";
        let summary = summarize(source);
        assert!(summary.functions.is_empty());
        assert_eq!(summary.classes.len(), 1);
    }

    #[test]
    fn test_nested_class_line_counts_too() {
        // The class sits inside `outer`, yet `late` is still dropped
        let source = "def outer():\n    class Inner:\n        pass\n\ndef late():\n    pass\n";
        let summary = summarize(source);
        assert_eq!(names(&summary.functions), vec!["outer"]);
        assert_eq!(summary.classes[0].name, "Inner");
        assert_eq!(summary.classes[0].line, 2);
    }

    #[test]
    fn test_imports_in_walk_order() {
        let source = "import os\nimport os.path, sys as system\nfrom collections.abc import Mapping\nfrom . import sibling\nfrom .pkg.mod import thing\nfrom __future__ import annotations\n";
        let summary = summarize(source);
        let rendered: Vec<String> = summary.imports.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "os",
                "os.path",
                "sys",
                "from collections.abc",
                "from pkg.mod",
                "from __future__",
            ]
        );
    }

    #[test]
    fn test_positional_parameters() {
        let source = "def f(a, b: int, c=1, d: str = 'x', *args, e, **kwargs):\n    pass\n\ndef g(p, /, q, *, r):\n    pass\n";
        let summary = summarize(source);
        assert_eq!(summary.functions[0].args, vec!["a", "b", "c", "d"]);
        assert_eq!(summary.functions[1].args, vec!["q"]);
    }

    #[test]
    fn test_decorated_methods_count_async_ones_do_not() {
        let source = "class Service:\n    @property\n    def name(self):\n        return 'svc'\n\n    async def fetch(self):\n        pass\n\n    @cached\n    async def load(self):\n        pass\n\n    value = 3\n";
        let summary = summarize(source);
        assert_eq!(summary.classes[0].methods, vec!["name"]);
        assert!(summary.functions.is_empty());
    }

    #[test]
    fn test_async_functions_are_not_recorded() {
        let source = "async def top():\n    def inner(x):\n        pass\n\ndef plain():\n    pass\n";
        let summary = summarize(source);
        assert_eq!(names(&summary.functions), vec!["inner", "plain"]);
        assert_eq!(summary.functions[0].line, 2);
    }

    #[test]
    fn test_python2_print_is_a_syntax_error() {
        let err = extract(Path::new("legacy.py"), "import os\nprint \"hello\"\n").unwrap_err();
        assert!(matches!(err, RepoMapError::Extraction { .. }));
        assert_eq!(err.to_string(), "Missing parentheses in call to 'print' at line 2");

        let summary = summarize("print(\"hello\")\nprint()\n");
        assert!(summary.functions.is_empty());
    }

    #[test]
    fn test_python2_exec_is_a_syntax_error() {
        let err = extract(Path::new("legacy.py"), "x = 1\n\nexec \"x = 2\"\n").unwrap_err();
        assert!(matches!(err, RepoMapError::Extraction { .. }));
        assert_eq!(err.to_string(), "invalid syntax at line 3");

        assert!(extract(Path::new("modern.py"), "exec(\"x = 2\")\n").is_ok());
    }

    #[test]
    fn test_syntax_error_is_an_extraction_failure() {
        let err = extract(Path::new("broken.py"), "def ok():\n    pass\n\ndef broken(:\n").unwrap_err();
        assert!(matches!(err, RepoMapError::Extraction { .. }));
        assert!(err.to_string().contains("invalid syntax at line"));
    }

    #[test]
    fn test_empty_module() {
        let summary = summarize("");
        assert_eq!(summary, PythonSummary::default());
    }
}
