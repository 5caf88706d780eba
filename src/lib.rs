//! # Dirsnap
//!
//! `dirsnap` walks a directory tree and writes the path and contents of every file it
//! finds into one aggregate text file, so a whole project can be handed around as a
//! single flat snapshot.
//!
//! Each file becomes one record: a `--- File: <path> ---` header, the file's UTF-8
//! content and a blank line. Files that cannot be read or decoded still get a record,
//! with a `[Could not read file: <reason>]` placeholder instead of their content.
//!
//! # Features
//!
//! - `parallel`: Reads files on a Rayon pool; records are still written in walk order.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirsnap::{AggregateBuilder, aggregate};
//!
//! let options = AggregateBuilder::new(".")
//!     .output("all_files_with_contents.txt")
//!     .build();
//!
//! let summary = aggregate(options).expect("Failed to snapshot directory");
//! println!("{}", summary.completion_message());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{FileRecords, aggregate, read_file};
pub use error::AggregateError;
pub use options::{AggregateBuilder, AggregateOptions, DEFAULT_OUTPUT};
pub use types::{AggregateSummary, FileContent, FileRecord};
