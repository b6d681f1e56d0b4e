use repomap::{AnalysisOptions, analyze_directory};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_python_classes_are_described() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("models.py"),
        "import os\nimport json\n\nclass User:\n    def save(self):\n        pass\n\nclass Group:\n    pass\n",
    )
    .unwrap();

    let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();
    let tour = &outcome.tour;

    assert!(tour.contains("This repository contains **1 files** with **9 lines of code**."));
    assert!(tour.contains("- **Key Dependencies:** json, os\n"));
    assert!(tour.contains("- **models.py** - Python module with 2 classes\n"));
    assert!(!tour.contains("### Key Files:"));
}

#[test]
fn test_key_files_and_nested_structure() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/components")).unwrap();
    fs::write(root.join("app.py"), "def run():\n    pass\n").unwrap();
    fs::write(root.join("package.json"), "{}\n").unwrap();
    fs::write(
        root.join("src/components/button.jsx"),
        "import React from 'react';\nfunction Button() { return null; }\n",
    )
    .unwrap();

    let outcome = analyze_directory(root, &AnalysisOptions::default()).unwrap();
    let tour = &outcome.tour;

    assert!(tour.contains("- **app.py** - 2 lines\n"));
    assert!(tour.contains(
        "- **src/** - Directory containing:\n  - **components/** - Directory containing:\n    - **button.jsx** - JavaScript file with 1 functions\n"
    ));
    assert!(tour.contains(
        "### Key Files:\n- **app.py** - Entry point or configuration file\n- **package.json** - Entry point or configuration file\n"
    ));
    assert!(tour.ends_with("- `react`\n"));
}

#[test]
fn test_header_names_at_most_five_dependencies() {
    let dir = tempdir().unwrap();
    let imports: String = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"]
        .iter()
        .map(|name| format!("import {}\n", name))
        .collect();
    fs::write(dir.path().join("deps.py"), imports).unwrap();

    let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();

    assert!(outcome
        .tour
        .contains("- **Key Dependencies:** alpha, bravo, charlie, delta, echo\n"));
    assert!(outcome.tour.contains("- `golf`\n"));
}

#[test]
fn test_ignored_directories_are_not_toured() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/lib")).unwrap();
    fs::write(dir.path().join("node_modules/lib/index.js"), "function x() {}\n").unwrap();
    fs::write(dir.path().join("README.md"), "# Demo\n").unwrap();

    let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();

    assert!(!outcome.tour.contains("node_modules"));
    assert!(outcome.tour.contains("- **README.md** - 1 lines\n"));
}
