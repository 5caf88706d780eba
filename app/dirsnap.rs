//! Command-line interface for dirsnap.
//!
//! Walks a directory tree and writes every file's path and contents into a
//! single text file, then prints one confirmation line.

use clap::Parser;
use dirsnap::{AggregateBuilder, AggregateOptions, DEFAULT_OUTPUT, aggregate};
use std::path::PathBuf;
use std::process::exit;

/// dirsnap — flatten a directory tree into one text file
#[derive(Parser)]
#[command(name = "dirsnap", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Aggregate output file, truncated on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also record the output file if the walk reaches it
    #[arg(long)]
    include_self: bool,

    /// Log progress to stderr (needs the `logging` feature)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> (AggregateOptions, bool) {
        let options = AggregateBuilder::new(self.root)
            .output(self.output)
            .exclude_output(!self.include_self)
            .build();
        (options, self.verbose)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(verbose);
    #[cfg(not(feature = "logging"))]
    let _ = verbose;

    match aggregate(options) {
        Ok(summary) => println!("{}", summary.completion_message()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }
}
