//! Recursive marker-file scanner

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::error::Result;

use super::config::ScanConfig;
use super::groups::MatchGroups;
use super::matcher::MarkerMatcher;

pub struct McqScanner {
    matcher: MarkerMatcher,
}

impl McqScanner {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            matcher: MarkerMatcher::new(config)?,
        })
    }

    /// Walk every file under `root` and group the matches.
    ///
    /// Hidden files are included and no ignore files are honoured. Links
    /// to files are classified like files; links to directories are not
    /// followed. The first unreadable entry aborts the scan.
    pub fn scan(&self, root: &Path) -> Result<MatchGroups> {
        debug!(root = %root.display(), "scanning for marker files");

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .build();

        let mut groups = MatchGroups::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir || !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if let Some(id) = self.matcher.classify(&name) {
                trace!(path = %path.display(), id, "matched");
                groups.insert(id, path.to_path_buf());
            }
        }

        debug!(
            unique = groups.unique_ids(),
            files = groups.total_files(),
            "scan finished"
        );
        Ok(groups)
    }
}
