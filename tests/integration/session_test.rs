use repomap::core::session::LIVENESS_MESSAGE;
use repomap::{AnalysisEnvelope, AnalysisOptions, RepoMapError, analyze_directory, analyze_repository};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn populate(root: &Path) {
    fs::create_dir_all(root.join("service/handlers")).unwrap();
    fs::create_dir_all(root.join("web/src")).unwrap();
    fs::write(
        root.join("main.py"),
        "import os\nfrom service.app import create\n\ndef main():\n    create()\n",
    )
    .unwrap();
    fs::write(
        root.join("service/app.py"),
        "import flask\n\nclass App:\n    def run(self, port):\n        pass\n",
    )
    .unwrap();
    fs::write(root.join("service/handlers/broken.py"), "def oops(:\n").unwrap();
    fs::write(
        root.join("web/src/index.tsx"),
        "import React from 'react';\nimport { x } from \"@scope/pkg/util\";\nconst App = () => null;\n",
    )
    .unwrap();
    fs::write(root.join("package.json"), "{\n  \"name\": \"web\"\n}\n").unwrap();
}

#[test]
fn test_runs_over_identical_content_are_identical() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    populate(first.path());
    populate(second.path());

    let options = AnalysisOptions::default();
    let a = analyze_directory(first.path(), &options).unwrap();
    let b = analyze_directory(second.path(), &options).unwrap();

    assert_eq!(a.report.to_json().unwrap(), b.report.to_json().unwrap());
    assert_eq!(a.tour, b.tour);
}

#[test]
fn test_report_contents() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();
    let report = &outcome.report;

    assert_eq!(report.total_files(), 5);
    assert_eq!(
        report.statistics.top_dependencies,
        vec!["@scope", "flask", "os", "react", "service"]
    );

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let root = &value["repository_structure"]["children"];
    assert_eq!(root["service"]["type"], "directory");
    assert_eq!(root["main.py"]["type"], "file");
    assert_eq!(root["main.py"]["kind"], "python");
    assert_eq!(
        root["service"]["children"]["handlers"]["children"]["broken.py"]["analysis"]["status"],
        "failed"
    );
    assert_eq!(value["analysis_metadata"]["max_depth"], 4);
}

#[test]
fn test_failed_extraction_is_local() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let outcome = analyze_directory(dir.path(), &AnalysisOptions::default()).unwrap();
    let files = outcome.report.root().files();
    let failed: Vec<_> = files.iter().filter(|f| f.error().is_some()).collect();

    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].path, "service/handlers/broken.py");
    assert_eq!(failed[0].lines(), 0);
}

#[test]
fn test_invalid_exclude_pattern_aborts_run() {
    let dir = tempdir().unwrap();
    let options = AnalysisOptions {
        exclude_patterns: vec!["[".to_string()],
        ..Default::default()
    };

    let err = analyze_directory(dir.path(), &options).unwrap_err();
    assert!(matches!(err, RepoMapError::GlobPattern { .. }));
}

#[test]
fn test_malformed_locator_is_acquisition_failure() {
    let envelope = analyze_repository("definitely not a url", &AnalysisOptions::default());

    match &envelope {
        AnalysisEnvelope::Failure { success, error, error_kind } => {
            assert!(!success);
            assert!(!error.is_empty());
            assert_eq!(error_kind, "acquisition");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_unreachable_repository_is_acquisition_failure() {
    let dir = tempdir().unwrap();
    let locator = format!("file://{}/nothing-here", dir.path().display());

    let envelope = analyze_repository(&locator, &AnalysisOptions::default());
    let value: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["error_kind"], "acquisition");
}

#[test]
fn test_liveness_message() {
    let value = AnalysisEnvelope::liveness();
    assert_eq!(value["message"], LIVENESS_MESSAGE);
    assert_eq!(LIVENESS_MESSAGE, "RepoMap engine is running!");
}
