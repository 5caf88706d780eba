use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of reading one visited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    /// The whole file, decoded as UTF-8.
    Text(String),
    /// The file could not be opened, read or decoded. Holds the error description.
    Unreadable(String),
}

impl FileContent {
    pub fn is_readable(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

/// A single visited file: the path it was opened with and what reading it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The path exactly as produced by the walk, root prefix included.
    pub path: PathBuf,
    pub content: FileContent,
}

/// What a completed run wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// The aggregate file that was written.
    pub output: PathBuf,
    /// Number of records written, one per visited file.
    pub records: usize,
    /// How many of those records carry the unreadable placeholder.
    pub unreadable: usize,
}

impl AggregateSummary {
    /// The confirmation line printed after a successful run.
    pub fn completion_message(&self) -> String {
        format!(
            "All file paths and contents written to {}",
            self.output.display()
        )
    }
}
