//! Matches grouped by identifier

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Identifier of the catch-all group for matches without a number.
pub const UNIDENTIFIED: u64 = 0;

/// Mapping from identifier to the files carrying it.
///
/// Identifiers iterate in ascending order. Paths within a group are kept
/// sorted by their raw bytes and hold no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGroups {
    groups: BTreeMap<u64, Vec<PathBuf>>,
}

impl MatchGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path to a group. Returns false if it was already present.
    pub fn insert(&mut self, id: u64, path: PathBuf) -> bool {
        let paths = self.groups.entry(id).or_default();
        match paths.binary_search_by(|p| p.as_os_str().cmp(path.as_os_str())) {
            Ok(_) => false,
            Err(pos) => {
                paths.insert(pos, path);
                true
            }
        }
    }

    /// Paths of one group, if it has any.
    pub fn get(&self, id: u64) -> Option<&[PathBuf]> {
        self.groups.get(&id).map(Vec::as_slice)
    }

    /// Numbered groups in ascending order, without the sentinel group.
    pub fn identified(&self) -> impl Iterator<Item = (u64, &[PathBuf])> {
        self.groups
            .iter()
            .filter(|(id, _)| **id != UNIDENTIFIED)
            .map(|(id, paths)| (*id, paths.as_slice()))
    }

    /// Matches without an identifier; empty if there are none.
    pub fn unidentified(&self) -> &[PathBuf] {
        self.get(UNIDENTIFIED).unwrap_or(&[])
    }

    /// Number of distinct non-sentinel identifiers.
    pub fn unique_ids(&self) -> usize {
        self.identified().count()
    }

    /// Number of matched files across all groups.
    pub fn total_files(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check whether a path was recorded in any group.
    pub fn contains(&self, path: &Path) -> bool {
        self.groups
            .values()
            .any(|paths| paths.iter().any(|p| p == path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identified_ascending_without_sentinel() {
        let mut groups = MatchGroups::new();
        groups.insert(12, PathBuf::from("./q12.png"));
        groups.insert(UNIDENTIFIED, PathBuf::from("./mcq.png"));
        groups.insert(2, PathBuf::from("./q2.png"));

        let ids: Vec<_> = groups.identified().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2, 12]);
        assert_eq!(groups.unique_ids(), 2);
        assert_eq!(groups.total_files(), 3);
        assert_eq!(groups.unidentified(), &[PathBuf::from("./mcq.png")]);
    }

    #[test]
    fn test_paths_sorted_bytewise_and_deduplicated() {
        let mut groups = MatchGroups::new();
        assert!(groups.insert(1, PathBuf::from("./a/x.png")));
        assert!(groups.insert(1, PathBuf::from("./a.b/x.png")));
        assert!(groups.insert(1, PathBuf::from("./B.png")));
        assert!(!groups.insert(1, PathBuf::from("./a/x.png")));

        let paths: Vec<_> = groups
            .get(1)
            .unwrap()
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        assert_eq!(paths, vec!["./B.png", "./a.b/x.png", "./a/x.png"]);
        assert!(groups.contains(Path::new("./B.png")));
        assert!(!groups.contains(Path::new("./C.png")));
    }

    #[test]
    fn test_empty_groups() {
        let groups = MatchGroups::new();
        assert!(groups.is_empty());
        assert!(groups.unidentified().is_empty());
        assert_eq!(groups.unique_ids(), 0);
        assert_eq!(groups.total_files(), 0);
    }
}
