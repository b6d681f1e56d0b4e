use repomap::core::{IgnorePolicy, TreeBuilder};
use repomap::models::report::RunStats;
use repomap::{DirectoryNode, FileAnalysis, StructuralSummary, TreeEntry};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn build(root: &Path, max_depth: usize) -> (DirectoryNode, RunStats) {
    TreeBuilder::new(IgnorePolicy::new())
        .build(root, max_depth)
        .expect("tree should build")
}

#[test]
fn test_ignored_entries_never_appear_or_count() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::write(root.join("node_modules/react/index.js"), "import a from 'left-pad';\n").unwrap();
    fs::create_dir_all(root.join("__pycache__")).unwrap();
    fs::write(root.join("__pycache__/mod.cpython-311.pyc"), "x").unwrap();
    fs::create_dir_all(root.join("venv/lib")).unwrap();
    fs::write(root.join("venv/lib/site.py"), "import numpy\n").unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(root.join(".env"), "SECRET=1\n").unwrap();
    fs::write(root.join("app.py"), "import flask\n").unwrap();

    let (tree, stats) = build(root, 4);

    assert_eq!(tree.children.keys().collect::<Vec<_>>(), vec!["app.py"]);
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.total_lines, 1);
    assert_eq!(stats.dependencies.top(10), vec!["flask"]);
}

#[test]
fn test_directory_with_only_ignored_entries_is_absent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("build/.cache")).unwrap();
    fs::write(dir.path().join("build/.cache/blob"), "data").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let (tree, _) = build(dir.path(), 4);
    assert!(tree.get("build").is_none());
    assert!(tree.get("README.md").is_some());
}

#[test]
fn test_empty_nested_directory_is_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("main.py"), "def run():\n    pass\n").unwrap();

    let (tree, stats) = build(dir.path(), 4);
    assert!(tree.get("a").is_none());
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.total_lines, 2);
}

#[test]
fn test_subtrees_beyond_max_depth_are_absent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("l1/l2/l3")).unwrap();
    fs::write(dir.path().join("l1/one.txt"), "1\n").unwrap();
    fs::write(dir.path().join("l1/l2/two.txt"), "2\n").unwrap();
    fs::write(dir.path().join("l1/l2/l3/three.txt"), "3\n").unwrap();

    let (tree, stats) = build(dir.path(), 1);
    assert!(tree.get("l1/one.txt").is_some());
    // l2 lies below the limit and has no surviving children
    assert!(tree.get("l1/l2").is_none());
    assert_eq!(stats.total_files, 1);

    let (deeper, stats) = build(dir.path(), 3);
    assert!(deeper.get("l1/l2/l3/three.txt").is_some());
    assert_eq!(stats.total_files, 3);
}

#[test]
fn test_duplicate_python_roots_collapse() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("paths.py"), "import os\nimport os.path\n").unwrap();

    let (_, stats) = build(dir.path(), 4);
    assert_eq!(stats.dependencies.len(), 1);
    assert!(stats.dependencies.contains("os"));
}

#[test]
fn test_javascript_root_is_first_segment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hooks.js"), "import x from \"react/hooks\";\n").unwrap();

    let (tree, stats) = build(dir.path(), 4);
    assert_eq!(stats.dependencies.top(10), vec!["react"]);
    match tree.get("hooks.js") {
        Some(TreeEntry::File(file)) => match file.summary() {
            Some(StructuralSummary::JavaScript(summary)) => {
                assert_eq!(summary.imports, vec!["react/hooks"]);
            }
            other => panic!("unexpected summary: {:?}", other),
        },
        other => panic!("expected file, got {:?}", other),
    }
}

#[test]
fn test_undecodable_file_does_not_affect_siblings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), [0x89, 0x50, 0x4e, 0x47, 0xff, 0xd8]).unwrap();
    fs::write(dir.path().join("notes.txt"), "first\nsecond\n").unwrap();

    let (tree, stats) = build(dir.path(), 4);

    match tree.get("logo.png") {
        Some(TreeEntry::File(file)) => {
            assert_eq!(file.analysis, FileAnalysis::Unreadable);
            assert_eq!(file.lines(), 0);
            assert!(file.error().is_none());
        }
        other => panic!("expected file, got {:?}", other),
    }
    match tree.get("notes.txt") {
        Some(TreeEntry::File(file)) => assert_eq!(file.lines(), 2),
        other => panic!("expected file, got {:?}", other),
    }
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_lines, 2);
}

#[test]
fn test_preview_is_truncated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("long.txt"), "x".repeat(500)).unwrap();
    fs::write(dir.path().join("short.txt"), "short").unwrap();

    let (tree, _) = build(dir.path(), 4);
    let preview = |name: &str| match tree.get(name) {
        Some(TreeEntry::File(file)) => match &file.analysis {
            FileAnalysis::Analyzed { content_preview, .. } => content_preview.clone(),
            other => panic!("unexpected analysis: {:?}", other),
        },
        other => panic!("expected file, got {:?}", other),
    };

    assert_eq!(preview("long.txt"), format!("{}...", "x".repeat(200)));
    assert_eq!(preview("short.txt"), "short");
}

#[test]
fn test_user_patterns_extend_policy() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Cargo.lock"), "lock\n").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

    let policy = IgnorePolicy::with_patterns(&["*.lock"]).unwrap();
    let (tree, stats) = TreeBuilder::new(policy).build(dir.path(), 4).unwrap();

    assert!(tree.get("Cargo.lock").is_none());
    assert!(tree.get("Cargo.toml").is_some());
    assert_eq!(stats.total_files, 1);
}

#[test]
fn test_classic_mac_line_endings_are_counted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("old.txt"), "one\rtwo\rthree\r").unwrap();
    fs::write(dir.path().join("paged.txt"), "page one\x0cpage two\n").unwrap();

    let (tree, stats) = build(dir.path(), 4);
    assert_eq!(stats.total_lines, 5);
    match tree.get("old.txt") {
        Some(TreeEntry::File(file)) => assert_eq!(file.lines(), 3),
        other => panic!("expected file, got {:?}", other),
    }
}
