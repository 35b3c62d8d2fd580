//! Scan summary rendering and report file naming

use std::io::{self, Write};

use chrono::{DateTime, TimeZone};
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

use crate::scan::{MatchGroups, ScanConfig};

/// Width of the `=` rules under section headings.
const RULE_WIDTH: usize = 80;

/// Name of the report file for a run started at `at`.
pub fn report_file_name<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.txt", prefix, at.format("%Y%m%d_%H%M%S"))
}

/// First line of the report file.
pub fn report_header<Tz: TimeZone>(title: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} - Generated on {}", title, at.format("%Y-%m-%d %H:%M:%S"))
}

/// Write the grouped matches followed by the summary statistics.
///
/// Numbered groups come first in ascending order, then the unnumbered
/// matches if there are any. A warning line is added when fewer than
/// `expected` distinct numbers were found.
pub fn render_summary<W: WriteColor>(groups: &MatchGroups, expected: usize, out: &mut W) -> io::Result<()> {
    heading(out, "\nMCQ Files Summary:")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for (id, paths) in groups.identified() {
        heading(out, &format!("\nMCQ #{}:", id))?;
        for path in paths {
            writeln!(out, "  - {}", path.display())?;
        }
    }

    let unidentified = groups.unidentified();
    if !unidentified.is_empty() {
        heading(out, "\nMCQ files without clear numbers:")?;
        for path in unidentified {
            writeln!(out, "  - {}", path.display())?;
        }
    }

    let unique = groups.unique_ids();
    heading(out, "\nSummary Statistics:")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Total unique MCQ numbers found: {}", unique)?;
    writeln!(out, "Total MCQ files found: {}", groups.total_files())?;

    if unique < expected {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "Warning: Found {}/{} expected MCQ questions", unique, expected)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Render the summary as plain text.
pub fn summary_text(groups: &MatchGroups, expected: usize) -> io::Result<String> {
    let mut out = NoColor::new(Vec::new());
    render_summary(groups, expected, &mut out)?;
    Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
}

/// Write the header line and then the summary to `file`, echoing the
/// summary to `echo` as it goes.
pub fn write_scan_report<F, E, Tz>(
    groups: &MatchGroups,
    config: &ScanConfig,
    at: &DateTime<Tz>,
    file: &mut F,
    echo: &mut E,
) -> io::Result<()>
where
    F: Write,
    E: WriteColor,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    writeln!(file, "{}", report_header(&config.report_title, at))?;
    let mut tee = super::Tee::new(&mut *file, &mut *echo);
    render_summary(groups, config.expected_count, &mut tee)?;
    tee.flush()
}

fn heading<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    // Leading newlines stay uncolored so the reset lands on the heading line.
    let trimmed = text.trim_start_matches('\n');
    for _ in 0..(text.len() - trimmed.len()) {
        writeln!(out)?;
    }
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", trimmed)?;
    out.reset()?;
    writeln!(out)
}
