//! Marker-file scanning
//!
//! Finds image files whose names carry a marker (`mcq` by default), pulls
//! the number that follows the marker and groups the files by it.

mod config;
mod groups;
mod matcher;
mod scanner;

use std::path::Path;

pub use config::{
    DEFAULT_EXPECTED_COUNT, DEFAULT_EXTENSION, DEFAULT_MARKER, DEFAULT_REPORT_PREFIX,
    DEFAULT_REPORT_TITLE, ScanConfig,
};
pub use groups::{MatchGroups, UNIDENTIFIED};
pub use matcher::MarkerMatcher;
pub use scanner::McqScanner;

use crate::error::Result;

/// Scan `root` with the default marker and extension.
pub fn scan(root: &Path) -> Result<MatchGroups> {
    McqScanner::new(&ScanConfig::default())?.scan(root)
}
