//! Directory tree walking logic
//!
//! Two walkers share one listing routine (`traversal`):
//!
//! - `TreeWalker`: builds the full tree in memory as `DirectoryEntry` nodes
//! - `StreamingWalker`: hands entries to a `StreamingOutput` as it goes

mod config;
mod entry;
mod streaming;
mod traversal;
mod utils;
mod walker;

pub use config::{DEFAULT_SKIP_NAMES, TreeConfig};
pub use entry::DirectoryEntry;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use traversal::{BAR, BLANK, CORNER, ListedEntry, TEE, branch_glyph, child_prefix};
pub use utils::{entry_name, glob_match, should_skip_name};
pub use walker::TreeWalker;
