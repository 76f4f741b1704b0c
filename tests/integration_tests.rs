//! Integration tests for the dexidoc CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's home directory and log settings
fn dexidoc(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dexidoc").unwrap();
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("DEXIDOC_CONFIG");
    cmd
}

fn create_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("doc1.txt"), "hello").unwrap();
    fs::write(root.join("script.py"), "print()").unwrap();
    fs::create_dir(root.join("subdir")).unwrap();
    fs::write(root.join("subdir/doc2.pdf"), "%PDF-1.7").unwrap();
    fs::write(root.join("subdir/ignore.txt"), "").unwrap();
    fs::create_dir(root.join("ignored_folder")).unwrap();
    fs::write(root.join("ignored_folder/doc3.docx"), "").unwrap();
    fs::create_dir_all(root.join("nested/deep")).unwrap();
    fs::write(root.join("nested/deep/skip_me.txt"), "").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD.txt"), "").unwrap();

    temp_dir
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    dexidoc(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    dexidoc(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dexidoc"));
}

#[test]
fn test_scan_with_default_config() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();

    let assert = dexidoc(home.path())
        .args(["-q", "scan", "--format", "json"])
        .arg(tree.path())
        .assert()
        .success();

    let files = json_lines(&assert.get_output().stdout);
    let paths: Vec<String> = files
        .iter()
        .map(|f| f["path"].as_str().unwrap().to_string())
        .collect();

    // Default extensions are .pdf, .txt and .docx; `.git` is excluded
    assert_eq!(files.len(), 5);
    assert!(paths.iter().any(|p| p.ends_with("doc1.txt")));
    assert!(paths.iter().any(|p| p.ends_with("doc3.docx")));
    assert!(!paths.iter().any(|p| p.ends_with("script.py")));
    assert!(!paths.iter().any(|p| p.contains(".git")));

    let pdf = files.iter().find(|f| f["file_type"] == ".pdf").unwrap();
    assert_eq!(pdf["size"], 8);
}

#[test]
fn test_scan_with_exclusions() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();

    let assert = dexidoc(home.path())
        .args(["-q", "scan", "--format", "json"])
        .args(["-e", "ignored_folder", "-e", "ignore.txt", "-e", "nested/deep/skip_me.txt"])
        .args(["--ext", ".txt,.pdf,.docx"])
        .arg(tree.path())
        .assert()
        .success();

    let mut names: Vec<String> = json_lines(&assert.get_output().stdout)
        .iter()
        .map(|f| {
            Path::new(f["path"].as_str().unwrap())
                .strip_prefix(tree.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();

    assert_eq!(names, vec!["doc1.txt", "subdir/doc2.pdf"]);
}

#[test]
fn test_scan_with_config_file() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();
    let config_path = home.path().join("custom.toml");
    fs::write(&config_path, "excludes = [\"subdir\"]\nextensions = [\".py\"]\n").unwrap();

    dexidoc(home.path())
        .arg("--config")
        .arg(&config_path)
        .args(["-q", "scan"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("script.py"))
        .stdout(predicate::str::contains("doc1.txt").not());
}

#[test]
fn test_scan_limit() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();

    let assert = dexidoc(home.path())
        .args(["-q", "scan", "--format", "json", "--limit", "2"])
        .arg(tree.path())
        .assert()
        .success();

    assert_eq!(json_lines(&assert.get_output().stdout).len(), 2);
}

#[test]
fn test_scan_missing_path_fails() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();

    dexidoc(home.path())
        .arg("scan")
        .arg(tree.path().join("non_existent_path"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base path does not exist"));
}

#[test]
fn test_scan_file_path_fails() {
    let home = TempDir::new().unwrap();
    let tree = create_tree();

    dexidoc(home.path())
        .arg("scan")
        .arg(tree.path().join("doc1.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base path is not a directory"));
}

#[test]
fn test_config_init_and_show() {
    let home = TempDir::new().unwrap();

    dexidoc(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("dexidoc/config.toml").is_file());

    // A second init refuses to overwrite
    dexidoc(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    dexidoc(home.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains(".docx"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();

    dexidoc(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dexidoc"))
        .stdout(predicate::str::contains("config.toml"));
}
