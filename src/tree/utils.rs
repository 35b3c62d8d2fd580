//! Shared utility functions for tree walking

use std::path::Path;

use glob::Pattern;

/// Check if an entry name is in the skip list, either verbatim or as a glob.
pub fn should_skip_name(name: &str, skip_names: &[String]) -> bool {
    skip_names
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Get the display name of a path, defaulting to "." for a bare root.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
