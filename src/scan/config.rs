//! Configuration for marker-file scans

/// Marker looked for in file names, compared case-insensitively.
pub const DEFAULT_MARKER: &str = "mcq";
/// Extension a candidate file name must end with.
pub const DEFAULT_EXTENSION: &str = ".png";
/// Number of distinct identifiers a complete set is expected to have.
pub const DEFAULT_EXPECTED_COUNT: usize = 40;
pub const DEFAULT_REPORT_PREFIX: &str = "mcq_locations";
pub const DEFAULT_REPORT_TITLE: &str = "MCQ File Locations Report";

/// Configuration for scanning and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub marker: String,
    pub extension: String,
    /// A summary with fewer distinct identifiers than this gets a warning line.
    pub expected_count: usize,
    /// Report files are named `<prefix>_<YYYYMMDD_HHMMSS>.txt`.
    pub report_prefix: String,
    pub report_title: String,
}

impl ScanConfig {
    /// The extension with a leading dot, lowercased.
    pub fn normalized_extension(&self) -> String {
        let ext = self.extension.to_lowercase();
        if ext.is_empty() || ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            expected_count: DEFAULT_EXPECTED_COUNT,
            report_prefix: DEFAULT_REPORT_PREFIX.to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}
