//! fsreport - directory tree printer and marker-file scanner
//!
//! - `tree` walks a directory and hands out entries in display order
//! - `scan` finds marker files and groups them by number
//! - `output` turns both into text files

pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    ColorMode, Tee, TreeFormatter, print_tree, render_summary, summary_text, write_scan_report,
    write_tree_report,
};
pub use scan::{MarkerMatcher, MatchGroups, McqScanner, ScanConfig, UNIDENTIFIED, scan};
pub use tree::{DirectoryEntry, StreamingOutput, StreamingWalker, TreeConfig, TreeWalker};
