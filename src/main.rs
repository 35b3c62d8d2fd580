//! CLI entry point for tree-tool

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use fsreport::output::DEFAULT_TREE_OUTPUT;
use fsreport::{Error, TreeConfig, logging, write_tree_report};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tree-tool")]
#[command(about = "Write a directory tree to a text file")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Skip entries with this name or glob pattern (can be used multiple
    /// times; replaces the default of .git)
    #[arg(short = 'I', long = "skip", value_name = "NAME")]
    skip: Vec<String>,

    /// File to write the tree to
    #[arg(short = 'o', long = "output", default_value = DEFAULT_TREE_OUTPUT)]
    output: PathBuf,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), Error> {
    let config = if args.skip.is_empty() {
        TreeConfig::default()
    } else {
        TreeConfig::with_skip_names(args.skip.iter().cloned())
    };

    let file = File::create(&args.output).map_err(|e| Error::io(&args.output, e))?;
    let mut sink = BufWriter::new(file);
    let (dirs, files) = write_tree_report(&args.directory, &config, &mut sink)?;
    sink.flush().map_err(|e| Error::io(&args.output, e))?;

    info!(dirs, files, output = %args.output.display(), "tree written");
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("tree-tool: {}", e);
        process::exit(1);
    }

    println!(
        "Directory tree has been written to {}",
        args.output.display()
    );
}
