//! Edge case and error handling tests


use harness::{TestDir, run_scan_tool, run_tree_tool, tree_lines};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Missing and unreadable paths
// ============================================================================

#[test]
fn test_tree_missing_directory_fails() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_tree_tool(dir.path(), &["does-not-exist"]);
    assert!(!success, "tree-tool should fail on a missing directory");
    assert!(stderr.contains("tree-tool:"), "stderr: {}", stderr);
    assert!(stderr.contains("does-not-exist"), "stderr: {}", stderr);
    assert!(!stdout.contains("has been written"));
}

#[test]
fn test_tree_on_file_fails() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("plain.txt"), "stderr: {}", stderr);
}

#[test]
fn test_scan_missing_root_fails() {
    let dir = TestDir::new();

    let (_stdout, stderr, success) = run_scan_tool(dir.path(), &["--root", "nowhere"]);
    assert!(!success);
    assert!(stderr.starts_with("scan-tool:"), "stderr: {}", stderr);
    assert!(dir.files_like("mcq_locations_", ".txt").is_empty());
}

#[test]
fn test_tree_unreadable_subdirectory_aborts() {
    let dir = TestDir::new();
    dir.add_file("t/ok.txt", "");
    let locked = dir.add_dir("t/locked");
    dir.add_file("t/locked/secret.txt", "");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; only check the failure when permissions hold.
    let readable = fs::read_dir(&locked).is_ok();
    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["t"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if !readable {
        assert!(!success, "unreadable directory should abort the walk");
        assert!(stderr.contains("locked"), "stderr: {}", stderr);
    } else {
        assert!(success, "{}", stderr);
    }
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_tree_lists_symlinked_directory_without_descending() {
    let dir = TestDir::new();
    dir.add_file("t/real/file.txt", "");
    symlink(dir.path().join("t/real"), dir.path().join("t/link")).unwrap();

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["t"]);
    assert!(success, "{}", stderr);

    let lines = tree_lines(&dir.read("directory_tree_output.txt"));
    assert_eq!(lines, vec!["├── real", "│   └── file.txt", "└── link"]);
}

#[test]
fn test_tree_parent_symlink_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("t/sub/file.txt", "");
    symlink("..", dir.path().join("t/sub/parent")).unwrap();

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["t"]);
    assert!(success, "should not hang on a parent symlink: {}", stderr);
    let lines = tree_lines(&dir.read("directory_tree_output.txt"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_scan_counts_symlinked_image_once_per_path() {
    let dir = TestDir::new();
    dir.add_file("src/mcq5.png", "");
    symlink(dir.path().join("src/mcq5.png"), dir.path().join("alias_mcq5.png")).unwrap();
    symlink(dir.path().join("src"), dir.path().join("src_link")).unwrap();

    let (stdout, stderr, success) = run_scan_tool(dir.path(), &["--color", "never"]);
    assert!(success, "{}", stderr);
    assert!(stdout.contains("  - ./alias_mcq5.png\n"), "{}", stdout);
    assert!(stdout.contains("  - ./src/mcq5.png\n"), "{}", stdout);
    // Linked directories are not followed
    assert!(!stdout.contains("src_link"), "{}", stdout);
    assert!(stdout.contains("Total MCQ files found: 2"));
}

#[test]
fn test_broken_symlink_is_listed_not_scanned() {
    let dir = TestDir::new();
    symlink("nonexistent.png", dir.path().join("t_mcq9.png")).unwrap();

    let (stdout, stderr, success) = run_scan_tool(dir.path(), &["--color", "never"]);
    assert!(success, "{}", stderr);
    assert!(stdout.contains("Total MCQ files found: 0"));

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["-o", "tree.txt"]);
    assert!(success, "{}", stderr);
    assert!(dir.read("tree.txt").contains("t_mcq9.png"));
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_unicode_and_spaces_in_names() {
    let dir = TestDir::new();
    dir.add_file("t/日本語/ファイル.txt", "");
    dir.add_file("t/with space.txt", "");

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["t"]);
    assert!(success, "{}", stderr);
    let lines = tree_lines(&dir.read("directory_tree_output.txt"));
    assert_eq!(lines, vec!["├── 日本語", "│   └── ファイル.txt", "└── with space.txt"]);
}

#[test]
fn test_empty_directory_tree_has_only_header() {
    let dir = TestDir::new();
    dir.add_dir("empty");

    let (_stdout, stderr, success) = run_tree_tool(dir.path(), &["empty"]);
    assert!(success, "{}", stderr);
    let contents = dir.read("directory_tree_output.txt");
    assert_eq!(contents.lines().count(), 3);
    assert!(tree_lines(&contents).is_empty());
}

#[test]
fn test_hidden_files_are_scanned() {
    let dir = TestDir::new();
    dir.add_file(".cache/mcq8.png", "");

    let (stdout, stderr, success) = run_scan_tool(dir.path(), &["--color", "never"]);
    assert!(success, "{}", stderr);
    assert!(stdout.contains("MCQ #8:\n  - ./.cache/mcq8.png\n"), "{}", stdout);
}
