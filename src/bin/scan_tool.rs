//! CLI entry point for scan-tool

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::Parser;
use fsreport::output::{report_file_name, write_scan_report};
use fsreport::scan::{
    DEFAULT_EXPECTED_COUNT, DEFAULT_EXTENSION, DEFAULT_MARKER, DEFAULT_REPORT_PREFIX,
    DEFAULT_REPORT_TITLE,
};
use fsreport::{ColorMode, Error, McqScanner, ScanConfig, logging};
use termcolor::StandardStream;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "scan-tool")]
#[command(about = "Find marker image files, group them by number and write a report")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(long = "root", default_value = ".")]
    root: PathBuf,

    /// Case-insensitive marker the file name must contain
    #[arg(long = "marker", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Extension the file name must end with
    #[arg(long = "extension", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Number of distinct identifiers expected; fewer produce a warning
    #[arg(long = "expected", default_value_t = DEFAULT_EXPECTED_COUNT)]
    expected: usize,

    /// Report file name prefix
    #[arg(long = "prefix", default_value = DEFAULT_REPORT_PREFIX)]
    prefix: String,

    /// Report title written on the first line of the report file
    #[arg(long = "title", default_value = DEFAULT_REPORT_TITLE)]
    title: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            marker: self.marker.clone(),
            extension: self.extension.clone(),
            expected_count: self.expected,
            report_prefix: self.prefix.clone(),
            report_title: self.title.clone(),
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, Error> {
    let config = args.scan_config();
    let started = Local::now();
    let output = PathBuf::from(report_file_name(&config.report_prefix, &started));

    let groups = McqScanner::new(&config)?.scan(&args.root)?;

    let file = File::create(&output).map_err(|e| Error::io(&output, e))?;
    let mut file = BufWriter::new(file);
    let stdout = StandardStream::stdout(args.color.choice());
    let mut echo = stdout.lock();

    write_scan_report(&groups, &config, &started, &mut file, &mut echo).map_err(Error::Write)?;
    file.flush().map_err(|e| Error::io(&output, e))?;

    info!(
        unique = groups.unique_ids(),
        files = groups.total_files(),
        output = %output.display(),
        "report written"
    );
    Ok(output)
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(output) => println!("\nReport has been saved to: {}", output.display()),
        Err(e) => {
            eprintln!("scan-tool: {}", e);
            process::exit(1);
        }
    }
}
