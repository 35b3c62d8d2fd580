//! Text output
//!
//! - `tree` - tree lines and the tree file layout
//! - `report` - scan summary and report file naming
//! - `tee` - writer duplicating output to a file and stdout
//! - `config` - color selection

mod config;
mod report;
mod tee;
mod tree;

pub use config::ColorMode;
pub use report::{render_summary, report_file_name, report_header, summary_text, write_scan_report};
pub use tee::Tee;
pub use tree::{
    DEFAULT_TREE_OUTPUT, TreeFormatter, absolute_path, format_tree, print_tree, write_tree_report,
};
