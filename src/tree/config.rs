//! Configuration types for tree walkers

/// Names skipped when no skip list is given.
pub const DEFAULT_SKIP_NAMES: &[&str] = &[".git"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Entry names (or glob patterns) left out of the listing.
    /// A skipped directory is not descended into.
    pub skip_names: Vec<String>,
}

impl TreeConfig {
    pub fn with_skip_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip_names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Configuration that lists every entry.
    pub fn show_all() -> Self {
        Self {
            skip_names: Vec::new(),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::with_skip_names(DEFAULT_SKIP_NAMES.iter().copied())
    }
}
