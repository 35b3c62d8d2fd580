//! StreamingWalker - streams output without building the tree in memory

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

use super::config::TreeConfig;
use super::traversal::{ListedEntry, child_prefix, read_visible_entries};

/// Callback for streaming output - receives entries in display order.
pub trait StreamingOutput {
    /// Called once per visible entry. `prefix` is the indentation built
    /// from the ancestors, without the entry's own branch glyph.
    fn output_node(&mut self, entry: &ListedEntry, is_last: bool, prefix: &str)
    -> std::io::Result<()>;

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> std::io::Result<()> {
        Ok(())
    }
}

/// Streaming tree walker. Uses O(depth) memory instead of O(entries).
pub struct StreamingWalker {
    config: TreeConfig,
}

impl StreamingWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk and stream output - returns (dir_count, file_count).
    ///
    /// The first filesystem error aborts the walk; whatever was already
    /// handed to `output` stays written.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<(usize, usize)> {
        debug!(root = %root.display(), "streaming directory tree");
        let mut counts = (0, 0);
        self.walk_dir_streaming(root, "", output, &mut counts)?;
        output.finish(counts.0, counts.1).map_err(Error::Write)?;
        Ok(counts)
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        counts: &mut (usize, usize),
    ) -> Result<()> {
        let entries = read_visible_entries(path, &self.config)?;
        let last_index = entries.len().saturating_sub(1);

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last_index;
            output
                .output_node(entry, is_last, prefix)
                .map_err(Error::Write)?;

            if entry.is_dir {
                counts.0 += 1;
                self.walk_dir_streaming(&entry.path, &child_prefix(prefix, is_last), output, counts)?;
            } else {
                counts.1 += 1;
            }
        }
        Ok(())
    }
}
