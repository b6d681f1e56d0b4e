use clap::Parser;
use repomap::cli::commands::exit_code;
use repomap::cli::{Args, Command};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_flag_selects_init_command() {
    let args = Args::parse_from(["repomap", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));

    let args = Args::parse_from(["repomap", "--path", "."]);
    assert!(matches!(Command::from_args(args), Command::Analyze(_)));
}

#[test]
fn test_repo_and_path_are_exclusive() {
    let result = Args::try_parse_from(["repomap", "--path", ".", "--repo", "https://example.com/r.git"]);
    assert!(result.is_err());
}

#[test]
fn test_analyze_writes_json_to_file() {
    let repo = tempdir().unwrap();
    fs::write(repo.path().join("main.py"), "import requests\n\ndef main():\n    pass\n").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("map.json");

    let args = Args::parse_from([
        "repomap",
        "--path",
        repo.path().to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        out.to_str().unwrap(),
        "--no-colors",
    ]);
    Command::from_args(args).execute().unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["repo_map"]["statistics"]["total_files"], 1);
    assert_eq!(value["repo_map"]["statistics"]["top_dependencies"][0], "requests");
    assert!(value["repo_tour"].as_str().unwrap().contains("**main.py**"));
}

#[test]
fn test_markdown_output_is_the_tour() {
    let repo = tempdir().unwrap();
    fs::write(repo.path().join("notes.txt"), "one\ntwo\n").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("tour.md");

    let args = Args::parse_from([
        "repomap",
        "-p",
        repo.path().to_str().unwrap(),
        "-o",
        "md",
        "--output-file",
        out.to_str().unwrap(),
    ]);
    Command::from_args(args).execute().unwrap();

    let tour = fs::read_to_string(&out).unwrap();
    assert!(tour.starts_with("# Repository Tour"));
    assert!(tour.contains("- **notes.txt** - 2 lines"));
}

#[test]
fn test_missing_path_fails_with_nonzero_exit() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let args = Args::parse_from(["repomap", "--path", missing.to_str().unwrap(), "--quiet"]);
    let err = Command::from_args(args).execute().unwrap_err();

    assert_ne!(exit_code(&err), 0);
}

#[test]
fn test_excessive_depth_is_rejected() {
    let repo = tempdir().unwrap();
    let args = Args::parse_from([
        "repomap",
        "--path",
        repo.path().to_str().unwrap(),
        "--max-depth",
        "65",
    ]);
    let err = Command::from_args(args).execute().unwrap_err();
    assert_eq!(exit_code(&err), 2);
}
