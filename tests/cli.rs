//! Command-line surface checks

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_tree_tool_help() {
    Command::cargo_bin("tree-tool")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip"))
        .stdout(predicate::str::contains("[DIRECTORY]"));
}

#[test]
fn test_scan_tool_help() {
    Command::cargo_bin("scan-tool")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--expected"))
        .stdout(predicate::str::contains("--marker"));
}

#[test]
fn test_scan_tool_rejects_unknown_color() {
    Command::cargo_bin("scan-tool")
        .unwrap()
        .args(["--color", "sometimes"])
        .assert()
        .failure();
}

#[test]
fn test_tree_tool_confirmation_line() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("tree-tool")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::eq(
            "Directory tree has been written to directory_tree_output.txt\n",
        ));
}

#[test]
fn test_scan_tool_warning_names_shortfall() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("mcq1.png"), "").unwrap();

    Command::cargo_bin("scan-tool")
        .unwrap()
        .current_dir(dir.path())
        .args(["--expected", "5", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Found 1/5 expected MCQ questions",
        ))
        .stdout(predicate::str::contains("Report has been saved to: mcq_locations_"));
}

#[test]
fn test_tree_tool_missing_directory_exit_code() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("tree-tool")
        .unwrap()
        .current_dir(dir.path())
        .arg("missing")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("tree-tool: cannot access"));
}
