//! Directory listing shared by TreeWalker and StreamingWalker.
//!
//! Both walkers see the same children in the same order: skipped names are
//! dropped first, then directories come before files and each group is
//! sorted case-insensitively.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{IoResultExt, Result};

use super::config::TreeConfig;
use super::utils::should_skip_name;

/// Branch glyph for an entry that has later siblings.
pub const TEE: &str = "├── ";
/// Branch glyph for the last visible entry of a listing.
pub const CORNER: &str = "└── ";
/// Prefix extension below a non-last entry.
pub const BAR: &str = "│   ";
/// Prefix extension below the last entry.
pub const BLANK: &str = "    ";

/// One visible child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    /// True for real directories. Symlinks are never directories here,
    /// so the walk cannot follow a link cycle.
    pub is_dir: bool,
}

/// Order entries: directories first, then case-insensitive name, then the
/// exact name so that `B` and `b` keep a stable order.
pub fn compare_entries(a: &ListedEntry, b: &ListedEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Read, filter, and sort the entries of a directory.
pub fn read_visible_entries(path: &Path, config: &TreeConfig) -> Result<Vec<ListedEntry>> {
    trace!(path = %path.display(), "reading directory");

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).with_path(path)? {
        let entry = entry.with_path(path)?;
        let name = entry.file_name().to_string_lossy().to_string();

        if should_skip_name(&name, &config.skip_names) {
            trace!(name = %name, "skipping entry");
            continue;
        }

        let entry_path = entry.path();
        let is_dir = entry.file_type().with_path(&entry_path)?.is_dir();
        entries.push(ListedEntry {
            name,
            path: entry_path,
            is_dir,
        });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK)
    } else {
        format!("{}{}", current_prefix, BAR)
    }
}

/// Glyph drawn in front of an entry's name.
pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last { CORNER } else { TEE }
}
