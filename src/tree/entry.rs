//! In-memory directory tree

use std::path::PathBuf;

/// A node of a walked directory tree.
///
/// `children` holds the visible entries in listing order (directories
/// first, then files, each sorted case-insensitively). Files and symlinks
/// always have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<DirectoryEntry>,
}

impl DirectoryEntry {
    /// Number of visible entries below this node, recursively.
    /// The node itself is not counted.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// (directories, files) below this node.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.counts();
            if child.is_dir {
                (dirs + 1 + d, files + f)
            } else {
                (dirs + d, files + 1 + f)
            }
        })
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&DirectoryEntry> {
        self.children.iter().find(|c| c.name == name)
    }
}
