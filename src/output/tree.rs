//! Tree formatter for text output
//!
//! `TreeFormatter` renders entries handed over by `StreamingWalker` as
//! `prefix + glyph + name` lines. `format_tree` renders an in-memory
//! `DirectoryEntry` the same way.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, IoResultExt, Result};
use crate::tree::{
    DirectoryEntry, ListedEntry, StreamingOutput, StreamingWalker, TreeConfig, branch_glyph,
    child_prefix,
};

/// File written by `tree-tool` when no output path is given.
pub const DEFAULT_TREE_OUTPUT: &str = "directory_tree_output.txt";

/// Streaming formatter writing one line per entry to any sink.
pub struct TreeFormatter<W: Write> {
    sink: W,
}

impl<W: Write> TreeFormatter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> StreamingOutput for TreeFormatter<W> {
    fn output_node(&mut self, entry: &ListedEntry, is_last: bool, prefix: &str) -> io::Result<()> {
        writeln!(self.sink, "{}{}{}", prefix, branch_glyph(is_last), entry.name)
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        self.sink.flush()
    }
}

/// Write the tree below `root` to `sink`, skipping `skip_names`.
/// Returns (dir_count, file_count).
pub fn print_tree<W: Write>(root: &Path, skip_names: &[String], sink: &mut W) -> Result<(usize, usize)> {
    let walker = StreamingWalker::new(TreeConfig::with_skip_names(skip_names.iter().cloned()));
    let mut formatter = TreeFormatter::new(sink);
    walker.walk_streaming(root, &mut formatter)
}

/// Write the full tree file: header, blank line, root as given, tree lines.
pub fn write_tree_report<W: Write>(root: &Path, config: &TreeConfig, sink: &mut W) -> Result<(usize, usize)> {
    let absolute = absolute_path(root).with_path(root)?;

    writeln!(sink, "Directory tree for: {}", absolute.display()).map_err(Error::Write)?;
    writeln!(sink).map_err(Error::Write)?;
    writeln!(sink, "{}", root.display()).map_err(Error::Write)?;

    let mut formatter = TreeFormatter::new(sink);
    let counts = StreamingWalker::new(config.clone()).walk_streaming(root, &mut formatter)?;
    debug!(dirs = counts.0, files = counts.1, "tree written");
    Ok(counts)
}

/// Make `path` absolute against the working directory and normalize it
/// lexically: `.` components are dropped and `..` removes the preceding
/// component. Symlinks are not resolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            // `pop` stops at the root, so `/..` stays `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Render an in-memory tree's children as text lines.
pub fn format_tree(root: &DirectoryEntry) -> String {
    let mut output = String::new();
    format_children(root, "", &mut output);
    output
}

fn format_children(node: &DirectoryEntry, prefix: &str, output: &mut String) {
    let last_index = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i == last_index;
        output.push_str(prefix);
        output.push_str(branch_glyph(is_last));
        output.push_str(&child.name);
        output.push('\n');
        if child.is_dir {
            format_children(child, &child_prefix(prefix, is_last), output);
        }
    }
}
