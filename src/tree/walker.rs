//! TreeWalker - builds the full tree in memory

use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::config::TreeConfig;
use super::entry::DirectoryEntry;
use super::traversal::read_visible_entries;
use super::utils::entry_name;

/// Tree walker that builds the whole tree in memory.
/// For writing a tree out, use StreamingWalker instead.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, which must be a readable directory.
    pub fn walk(&self, root: &Path) -> Result<DirectoryEntry> {
        debug!(root = %root.display(), "building directory tree");
        Ok(DirectoryEntry {
            name: entry_name(root),
            path: root.to_path_buf(),
            is_dir: true,
            children: self.walk_dir(root)?,
        })
    }

    fn walk_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        let mut children = Vec::new();
        for entry in read_visible_entries(path, &self.config)? {
            let grandchildren = if entry.is_dir {
                self.walk_dir(&entry.path)?
            } else {
                Vec::new()
            };
            children.push(DirectoryEntry {
                name: entry.name,
                path: entry.path,
                is_dir: entry.is_dir,
                children: grandchildren,
            });
        }
        Ok(children)
    }
}
