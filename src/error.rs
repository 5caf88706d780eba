use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole run. Problems with a single file never end up here.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Reading the root or creating/writing the aggregate file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("Output {} does not name a file", .0.display())]
    OutputNotFile(PathBuf),
}
impl AggregateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AggregateError::Io {
            path: path.into(),
            source,
        }
    }
}
