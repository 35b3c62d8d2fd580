//! File name classification
//!
//! A name matches when, lowercased, it ends with the extension and contains
//! the marker. The identifier is the first digit run that follows the
//! marker, with optional whitespace in between.

use regex::Regex;

use crate::error::Result;

use super::config::ScanConfig;
use super::groups::UNIDENTIFIED;

#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    marker: String,
    extension: String,
    number: Regex,
}

impl MarkerMatcher {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let marker = config.marker.to_lowercase();
        let number = Regex::new(&format!(r"{}\s*([0-9]+)", regex::escape(&marker)))?;
        Ok(Self {
            marker,
            extension: config.normalized_extension(),
            number,
        })
    }

    /// Check whether a file name belongs in the scan at all.
    pub fn is_match(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        lower.ends_with(&self.extension) && lower.contains(&self.marker)
    }

    /// Extract the number following the marker.
    ///
    /// Returns `None` when there is no digit run after the marker, or when
    /// the digits do not fit in a `u64`.
    pub fn extract_id(&self, file_name: &str) -> Option<u64> {
        let lower = file_name.to_lowercase();
        self.number
            .captures(&lower)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }

    /// Group a file name: `None` if it is not a match, otherwise its
    /// identifier or the sentinel group.
    pub fn classify(&self, file_name: &str) -> Option<u64> {
        if !self.is_match(file_name) {
            return None;
        }
        Some(self.extract_id(file_name).unwrap_or(UNIDENTIFIED))
    }
}
